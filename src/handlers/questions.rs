use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};

use super::PageQuery;
use crate::{
    models::QuestionSubmission,
    names,
    rejections::{self, AppError, ResultExt},
    services::trivia::{DeleteQuestionOutcome, ListQuestionsOutcome, SubmitQuestionOutcome},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions)
                .post(submit_question)
                .fallback(rejections::method_not_allowed),
        )
        .route(
            names::QUESTION_URL,
            delete(delete_question).fallback(rejections::method_not_allowed),
        )
}

async fn list_questions(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<Json<Value>, AppError> {
    let outcome = state
        .trivia
        .list_questions(page)
        .await
        .reject("could not get questions")?;

    match outcome {
        ListQuestionsOutcome::Listed { page, categories } => Ok(Json(json!({
            "success": true,
            "questions": page.questions,
            "total_questions": page.total_questions,
            "categories": categories,
            "current_category": null,
        }))),
        ListQuestionsOutcome::EmptyPage => Err(AppError::NotFound),
    }
}

async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(question_id) = question_id.map_err(|_| AppError::NotFound)?;

    let outcome = state
        .trivia
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    match outcome {
        DeleteQuestionOutcome::Deleted(id) => Ok(Json(json!({
            "success": true,
            "deleted": id,
        }))),
        DeleteQuestionOutcome::NotFound => {
            tracing::warn!("question {question_id} does not exist, nothing deleted");
            Err(AppError::NotFound)
        }
    }
}

/// `POST /questions` either searches (body has `searchTerm`) or creates a question.
async fn submit_question(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let submission = QuestionSubmission::from_slice(&body).ok_or_else(|| {
        tracing::warn!("could not decode question submission");
        AppError::Unprocessable
    })?;

    let outcome = state
        .trivia
        .submit_question(submission, page)
        .await
        .reject("could not submit question")?;

    match outcome {
        SubmitQuestionOutcome::Created(id) => Ok(Json(json!({
            "success": true,
            "created": id,
        }))),
        SubmitQuestionOutcome::Searched(page) => Ok(Json(json!({
            "success": true,
            "questions": page.questions,
            "total_questions": page.total_questions,
            "current_category": null,
        }))),
        SubmitQuestionOutcome::Unprocessable => {
            tracing::warn!("rejected blank search term or question text");
            Err(AppError::Unprocessable)
        }
    }
}
