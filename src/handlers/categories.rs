use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use super::PageQuery;
use crate::{
    names,
    rejections::{self, AppError, ResultExt},
    services::trivia::CategoryQuestionsOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::CATEGORIES_URL,
            get(list_categories).fallback(rejections::method_not_allowed),
        )
        .route(
            names::CATEGORY_QUESTIONS_URL,
            get(category_questions).fallback(rejections::method_not_allowed),
        )
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = state
        .trivia
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

async fn category_questions(
    State(state): State<AppState>,
    category_id: Result<Path<i64>, PathRejection>,
    PageQuery(page): PageQuery,
) -> Result<Json<Value>, AppError> {
    let Path(category_id) = category_id.map_err(|_| AppError::NotFound)?;

    let outcome = state
        .trivia
        .category_questions(category_id, page)
        .await
        .reject("could not get category questions")?;

    match outcome {
        CategoryQuestionsOutcome::Listed { page, category } => Ok(Json(json!({
            "success": true,
            "questions": page.questions,
            "total_questions": page.total_questions,
            "current_category": category,
        }))),
        CategoryQuestionsOutcome::CategoryNotFound => {
            tracing::warn!("category {category_id} does not exist");
            Err(AppError::NotFound)
        }
    }
}
