use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::category_dto::CategoryMap;
use crate::error::Error;
use crate::models::question::{NewQuestion, Question};
use crate::utils::deserializers::LooseI32;

/// All four fields must be present. An empty string counts as present.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    #[validate(required)]
    pub question: Option<String>,
    #[validate(required)]
    pub answer: Option<String>,
    #[validate(required)]
    #[schema(value_type = Option<i32>)]
    pub category: Option<LooseI32>,
    #[validate(required)]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<LooseI32>,
}

impl TryFrom<CreateQuestionPayload> for NewQuestion {
    type Error = Error;

    /// A missing field fails validation and maps to Unprocessable.
    fn try_from(payload: CreateQuestionPayload) -> Result<Self, Self::Error> {
        payload.validate()?;
        let CreateQuestionPayload {
            question: Some(question),
            answer: Some(answer),
            category: Some(category),
            difficulty: Some(difficulty),
        } = payload
        else {
            return Err(Error::Unprocessable("question fields missing".to_string()));
        };
        Ok(NewQuestion {
            question,
            answer,
            category: category.0,
            difficulty: difficulty.0,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchQuestionsPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    #[schema(value_type = BTreeMap<String, String>)]
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub question_created: String,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Number of questions in the whole store, not the number of matches.
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}
