use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::Error;

/// The router answers an unsupported method with a bare 405; give it the same
/// JSON body as every other error.
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return Error::MethodNotAllowed.into_response();
    }
    response
}
