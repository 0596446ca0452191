use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        question_dto::{
            CreateQuestionPayload, CreateQuestionResponse, DeleteQuestionResponse,
            QuestionListResponse, SearchQuestionsPayload, SearchQuestionsResponse,
        },
    },
    error::{Error, Result},
    models::question::NewQuestion,
    utils::pagination::PageQuery,
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "Page is empty", body = crate::dto::common_dto::ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let page = state.question_service.list(query.page()).await?;
    let categories = state.category_service.map().await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        categories,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Question not found", body = crate::dto::common_dto::ErrorBody),
        (status = 422, description = "Store failed to delete", body = crate::dto::common_dto::ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let deleted = state.question_service.delete(id).await?;
    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: deleted.id,
        questions: deleted.remaining,
        total_questions: deleted.total,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Body is not valid JSON", body = crate::dto::common_dto::ErrorBody),
        (status = 422, description = "A field is missing or the store failed", body = crate::dto::common_dto::ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    payload: std::result::Result<Json<CreateQuestionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let new_question = NewQuestion::try_from(payload)?;

    let created = state
        .question_service
        .create(new_question, query.page())
        .await?;
    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.question.id,
        question_created: created.question.question,
        questions: created.page,
        total_questions: created.total,
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchQuestionsPayload,
    responses(
        (status = 200, description = "Matching questions; total counts all questions", body = SearchQuestionsResponse),
        (status = 400, description = "searchTerm missing", body = crate::dto::common_dto::ErrorBody),
        (status = 404, description = "Nothing matched", body = crate::dto::common_dto::ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    payload: std::result::Result<Json<SearchQuestionsPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let term = payload
        .search_term
        .ok_or_else(|| Error::BadRequest("searchTerm is required".to_string()))?;

    let page = state.question_service.search(&term, query.page()).await?;
    Ok(Json(SearchQuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
    }))
}
