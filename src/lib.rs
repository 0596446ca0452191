pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::{DynStore, TriviaStore};
use crate::services::{
    category_service::CategoryService, question_service::QuestionService,
    quiz_service::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub category_service: CategoryService,
    pub question_service: QuestionService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(store: DynStore) -> Self {
        Self {
            category_service: CategoryService::new(store.clone()),
            question_service: QuestionService::new(store.clone()),
            quiz_service: QuizService::new(store.clone()),
            store,
        }
    }

    pub fn with_store<S: TriviaStore + 'static>(store: S) -> Self {
        Self::new(Arc::new(store))
    }
}
