use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use super::{category_map, paginate, requested_page, PageQuery};
use crate::db;
use crate::server::app::AppState;
use crate::server::error::ApiError;

async fn all_categories(State(pool): State<SqlitePool>) -> Result<Json<Value>, ApiError> {
    let categories = db::categories::get_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

// An unknown category and a category with no questions both report 422
// here, unlike the plain listing's 404. Existing clients depend on the
// difference.
async fn questions_for_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let questions = db::questions::get_questions_for_category(&pool, category_id).await?;
    if questions.is_empty() {
        return Err(ApiError::Unprocessable);
    }
    let category = db::categories::get_category(&pool, category_id)
        .await?
        .ok_or(ApiError::Unprocessable)?;

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&questions, requested_page(query)),
        "totalQuestions": questions.len(),
        "currentCategory": category.kind,
    })))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(all_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
