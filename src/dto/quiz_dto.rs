use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::question::Question;
use crate::utils::deserializers::LooseI32;

/// Category id that selects every question.
pub const ALL_CATEGORIES: i32 = 0;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[schema(value_type = i32)]
    pub id: LooseI32,
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizPayload {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

/// `question` is omitted once the candidate set is used up.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
