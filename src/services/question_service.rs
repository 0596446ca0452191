use tracing::{error, info};

use crate::database::DynStore;
use crate::error::{Error, Result};
use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};
use crate::utils::pagination::paginate;

#[derive(Clone)]
pub struct QuestionService {
    store: DynStore,
}

#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: i64,
}

#[derive(Debug)]
pub struct DeletedQuestion {
    pub id: i32,
    pub remaining: Vec<Question>,
    pub total: i64,
}

#[derive(Debug)]
pub struct CreatedQuestion {
    pub question: Question,
    pub page: Vec<Question>,
    pub total: i64,
}

impl QuestionService {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, page: i64) -> Result<QuestionPage> {
        let all = self.store.all_questions().await?;
        let questions = paginate(&all, page);
        if questions.is_empty() {
            return Err(Error::NotFound(format!("no questions on page {}", page)));
        }
        Ok(QuestionPage {
            questions,
            total: all.len() as i64,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedQuestion> {
        let existing = self.store.question_by_id(id).await.map_err(unprocessable)?;
        if existing.is_none() {
            return Err(Error::NotFound(format!("question {} does not exist", id)));
        }

        if !self.store.delete_question(id).await.map_err(unprocessable)? {
            // removed by a concurrent request between the lookup and the delete
            return Err(Error::NotFound(format!("question {} does not exist", id)));
        }
        info!(question_id = id, "question deleted");

        let remaining = self.store.all_questions().await.map_err(unprocessable)?;
        Ok(DeletedQuestion {
            id,
            total: remaining.len() as i64,
            remaining,
        })
    }

    pub async fn create(&self, new_question: NewQuestion, page: i64) -> Result<CreatedQuestion> {
        let question = self
            .store
            .insert_question(new_question)
            .await
            .map_err(unprocessable)?;
        info!(question_id = question.id, category = question.category, "question created");

        let all = self.store.all_questions().await.map_err(unprocessable)?;
        Ok(CreatedQuestion {
            question,
            page: paginate(&all, page),
            total: all.len() as i64,
        })
    }

    /// The returned total counts every stored question, not just the matches.
    /// Existing clients display it as such.
    pub async fn search(&self, term: &str, page: i64) -> Result<QuestionPage> {
        let matches = self.store.search_questions(term).await?;
        if matches.is_empty() {
            return Err(Error::NotFound(format!("no questions match '{}'", term)));
        }
        Ok(QuestionPage {
            questions: paginate(&matches, page),
            total: self.store.count_questions().await?,
        })
    }

    pub async fn by_category(&self, category: &Category, page: i64) -> Result<QuestionPage> {
        let selection = self.store.questions_by_category(category.id).await?;
        Ok(QuestionPage {
            questions: paginate(&selection, page),
            total: selection.len() as i64,
        })
    }
}

fn unprocessable(err: Error) -> Error {
    error!(error = ?err, "question store operation failed");
    Error::Unprocessable(err.to_string())
}
