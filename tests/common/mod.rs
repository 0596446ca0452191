#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use trivia_backend::{
    database::{DynStore, MemoryStore, TriviaStore},
    error::{Error, Result},
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    routes, AppState,
};

pub fn setup_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = routes::router(AppState::new(store.clone() as DynStore));
    (app, store)
}

pub async fn seed_question(store: &MemoryStore, text: &str, category: i32) -> Question {
    store
        .insert_question(NewQuestion {
            question: text.to_string(),
            answer: format!("answer to {text}"),
            category,
            difficulty: 2,
        })
        .await
        .expect("seed question")
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn assert_error(status: StatusCode, body: &JsonValue, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "unexpected body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}

/// Reads work, writes always fail.
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl TriviaStore for ReadOnlyStore {
    async fn all_categories(&self) -> Result<Vec<Category>> {
        self.inner.all_categories().await
    }

    async fn category_by_id(&self, id: i32) -> Result<Option<Category>> {
        self.inner.category_by_id(id).await
    }

    async fn all_questions(&self) -> Result<Vec<Question>> {
        self.inner.all_questions().await
    }

    async fn question_by_id(&self, id: i32) -> Result<Option<Question>> {
        self.inner.question_by_id(id).await
    }

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>> {
        self.inner.questions_by_category(category).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        self.inner.search_questions(term).await
    }

    async fn count_questions(&self) -> Result<i64> {
        self.inner.count_questions().await
    }

    async fn insert_question(&self, _question: NewQuestion) -> Result<Question> {
        Err(Error::Database(sqlx::Error::PoolClosed))
    }

    async fn delete_question(&self, _id: i32) -> Result<bool> {
        Err(Error::Database(sqlx::Error::PoolClosed))
    }
}
