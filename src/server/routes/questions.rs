use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use super::{category_map, paginate, requested_page, PageQuery};
use crate::db;
use crate::db::NewQuestion;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let questions = db::questions::get_questions(&pool).await?;
    let categories = db::categories::get_categories(&pool).await?;

    let page = paginate(&questions, requested_page(query));
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "totalQuestions": questions.len(),
        "categories": category_map(&categories),
        "currentCategory": Value::Null,
    })))
}

// Deleting an id that does not exist reports 422, not 404. Clients of
// the original API rely on that code.
async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<i64>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    db::questions::get_question_by_id(&pool, question_id)
        .await?
        .ok_or(ApiError::Unprocessable)?;
    db::questions::delete_question(&pool, question_id).await?;

    let remaining = db::questions::get_questions(&pool).await?;
    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
        "questions": paginate(&remaining, requested_page(query)),
    })))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(new) = payload.map_err(|_| ApiError::BadRequest)?;
    let id = db::questions::create_question(&pool, &new).await?;

    let questions = db::questions::get_questions(&pool).await?;
    Ok(Json(json!({
        "success": true,
        "created": id,
        "questions": paginate(&questions, 1),
        // The original API uses snake_case for this one field only.
        "total_questions": questions.len(),
    })))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::BadRequest)?;
    let matches = db::questions::search_questions(&pool, &body.search_term).await?;
    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&matches, requested_page(query)),
        "totalQuestions": matches.len(),
        "currentCategory": Value::Null,
    })))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{question_id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
