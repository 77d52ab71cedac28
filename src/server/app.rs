use std::any::Any;

use axum::extract::FromRef;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::rng::QuizRng;
use super::routes::{category_router, questions_router, quizzes_router};

#[derive(FromRef, Clone)]
pub struct AppState {
    pool: SqlitePool,
    rng: QuizRng,
}

pub fn app(pool: SqlitePool, rng: QuizRng) -> Router {
    let state = AppState { pool, rng };

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::DELETE]);

    Router::new()
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quizzes_router(state))
        .fallback(|| async { ApiError::NotFound })
        .method_not_allowed_fallback(|| async { ApiError::MethodNotAllowed })
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal.into_response()
}

pub async fn run_server(pool: SqlitePool, rng: QuizRng) -> anyhow::Result<()> {
    let addr = "0.0.0.0:8080";
    let app = app(pool, rng);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
