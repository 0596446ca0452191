use utoipa::OpenApi;

use crate::dto::{
    category_dto::CategoriesResponse,
    common_dto::ErrorBody,
    question_dto::{
        CategoryQuestionsResponse, CreateQuestionPayload, CreateQuestionResponse,
        DeleteQuestionResponse, QuestionListResponse, SearchQuestionsPayload,
        SearchQuestionsResponse,
    },
    quiz_dto::{QuizCategory, QuizPayload, QuizResponse},
};
use crate::models::{category::Category, question::Question};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API"),
    paths(
        routes::health::health,
        routes::categories::list_categories,
        routes::categories::list_category_questions,
        routes::questions::list_questions,
        routes::questions::delete_question,
        routes::questions::create_question,
        routes::questions::search_questions,
        routes::quizzes::next_quiz_question,
    ),
    components(schemas(
        Category,
        Question,
        ErrorBody,
        CategoriesResponse,
        QuestionListResponse,
        DeleteQuestionResponse,
        CreateQuestionPayload,
        CreateQuestionResponse,
        SearchQuestionsPayload,
        SearchQuestionsResponse,
        CategoryQuestionsResponse,
        QuizCategory,
        QuizPayload,
        QuizResponse,
    ))
)]
pub struct ApiDoc;
