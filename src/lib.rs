pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;
pub mod search;
pub mod services;

use axum::Router;

use crate::services::trivia::TriviaService;

#[derive(Clone)]
pub struct AppState {
    pub trivia: TriviaService,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self {
            trivia: TriviaService::new(db),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .fallback(rejections::not_found)
        .with_state(state)
}
