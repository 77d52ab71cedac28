use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::rng::QuizRng;

/// The frontend sends `{"type": "click", "id": 0}` for "all categories"
/// and serializes real category ids as strings.
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(rename = "type")]
    kind: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    State(rng): State<QuizRng>,
    payload: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::BadRequest)?;

    let candidates = if body.quiz_category.kind == "click" {
        db::questions::get_questions(&pool).await?
    } else {
        db::questions::get_questions_for_category(&pool, body.quiz_category.id).await?
    };
    // The empty-category check comes before the seen-question exclusion:
    // an empty category is 404, an exhausted one is success with null.
    if candidates.is_empty() {
        return Err(ApiError::NotFound);
    }

    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !body.previous_questions.contains(&q.id))
        .collect();
    if unseen.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "question": Value::Null,
        })));
    }

    let question = unseen[rng.pick(unseen.len())];
    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
