use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};

/// Persistence operations the handlers need. Every listing is ordered by id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn all_categories(&self) -> Result<Vec<Category>>;

    async fn category_by_id(&self, id: i32) -> Result<Option<Category>>;

    async fn all_questions(&self) -> Result<Vec<Question>>;

    async fn question_by_id(&self, id: i32) -> Result<Option<Question>>;

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>>;

    /// Case-insensitive literal substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn count_questions(&self) -> Result<i64>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Returns `false` when no question had this id.
    async fn delete_question(&self, id: i32) -> Result<bool>;
}

pub type DynStore = Arc<dyn TriviaStore>;
