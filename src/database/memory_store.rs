use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::store::TriviaStore;
use crate::error::Result;
use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_category_id: i32,
    last_question_id: i32,
}

/// Process-local store. Ids behave like database sequences: they only
/// grow and a deleted id is never handed out again.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the same categories as the database migrations.
    pub fn with_default_categories() -> Self {
        let mut tables = Tables::default();
        for name in DEFAULT_CATEGORIES {
            tables.last_category_id += 1;
            let id = tables.last_category_id;
            tables.categories.insert(
                id,
                Category {
                    id,
                    category_type: name.to_string(),
                },
            );
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn insert_category(&self, category_type: &str) -> Category {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            category_type: category_type.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        category
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn all_categories(&self) -> Result<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn category_by_id(&self, id: i32) -> Result<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn all_questions(&self) -> Result<Vec<Question>> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn question_by_id(&self, id: i32) -> Result<Option<Question>> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn count_questions(&self) -> Result<i64> {
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let created = question.with_id(tables.last_question_id);
        tables.questions.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        block_on(async {
            let first = store.insert_question(new_question("one", 1)).await.unwrap();
            let second = store.insert_question(new_question("two", 1)).await.unwrap();
            assert!(store.delete_question(second.id).await.unwrap());
            let third = store.insert_question(new_question("three", 1)).await.unwrap();

            assert_eq!(first.id, 1);
            assert_eq!(third.id, 3);
            assert!(store.question_by_id(second.id).await.unwrap().is_none());
            assert!(!store.delete_question(second.id).await.unwrap());
            assert_eq!(store.count_questions().await.unwrap(), 2);
        });
    }

    #[test]
    fn search_ignores_case_and_wildcards() {
        let store = MemoryStore::new();
        block_on(async {
            store
                .insert_question(new_question("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4))
                .await
                .unwrap();
            store.insert_question(new_question("What is 50% of 10?", 1)).await.unwrap();

            assert_eq!(store.search_questions("TITLED").await.unwrap().len(), 1);
            assert_eq!(store.search_questions("50%").await.unwrap().len(), 1);
            assert!(store.search_questions("_").await.unwrap().is_empty());
        });
    }

    #[test]
    fn default_categories_are_numbered_from_one() {
        let store = MemoryStore::with_default_categories();
        block_on(async {
            let categories = store.all_categories().await.unwrap();
            assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
            assert_eq!(categories[0].id, 1);
            assert_eq!(categories[0].category_type, "Science");
            let sports = store.category_by_id(6).await.unwrap().unwrap();
            assert_eq!(sports.category_type, "Sports");
        });
    }
}
