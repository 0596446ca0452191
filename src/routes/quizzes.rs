use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::quiz_dto::{QuizPayload, QuizResponse},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "Next unseen question, or no question once the category is exhausted", body = QuizResponse),
        (status = 400, description = "previous_questions or quiz_category missing", body = crate::dto::common_dto::ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn next_quiz_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let (Some(previous), Some(category)) = (payload.previous_questions, payload.quiz_category)
    else {
        return Err(Error::BadRequest(
            "previous_questions and quiz_category are required".to_string(),
        ));
    };

    let question = state
        .quiz_service
        .next_question(category.id.0, &previous)
        .await?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
