use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{category_dto::CategoriesResponse, question_dto::CategoryQuestionsResponse},
    error::Result,
    utils::pagination::PageQuery,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories keyed by id", body = CategoriesResponse),
        (status = 404, description = "No categories exist", body = crate::dto::common_dto::ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.category_service.list().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 400, description = "Category does not exist", body = crate::dto::common_dto::ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn list_category_questions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let category = state.category_service.require(id).await?;
    let page = state
        .question_service
        .by_category(&category, query.page())
        .await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        current_category: category.category_type,
    }))
}
