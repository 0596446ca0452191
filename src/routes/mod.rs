pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    middleware::map_response,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    error::Error,
    middleware::{cors::trivia_cors, errors::json_method_not_allowed},
    openapi::ApiDoc,
    AppState,
};

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::list_category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/:id", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(quizzes::next_quiz_question));

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .fallback(not_found)
        .with_state(state)
        .layer(map_response(json_method_not_allowed))
        .layer(trivia_cors())
        .layer(TraceLayer::new_for_http())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> Error {
    Error::NotFound("no such route".to_string())
}
