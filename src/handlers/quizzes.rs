use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use crate::{
    models::QuizRequest,
    names,
    quiz::CategoryScope,
    rejections::{self, AppError, ResultExt},
    services::trivia::QuizOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        names::QUIZZES_URL,
        post(play_quiz).fallback(rejections::method_not_allowed),
    )
}

async fn play_quiz(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, AppError> {
    let request = serde_json::from_slice::<QuizRequest>(&body).map_err(|e| {
        tracing::warn!("malformed quiz request: {e}");
        AppError::BadRequest
    })?;

    let scope = CategoryScope::from_id(request.quiz_category.id);
    let mut rng = StdRng::seed_from_u64(rand::random::<u64>());

    let outcome = state
        .trivia
        .draw_quiz_question(scope, request.previous_questions(), &mut rng)
        .await
        .reject("could not draw quiz question")?;

    match outcome {
        QuizOutcome::Question(question) => Ok(Json(json!({
            "success": true,
            "question": question,
        }))),
        QuizOutcome::Exhausted => Ok(Json(json!({
            "success": true,
            "question": null,
        }))),
        QuizOutcome::EmptyCategory => {
            tracing::warn!("quiz scope {scope:?} has no questions");
            Err(AppError::BadRequest)
        }
    }
}
