use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Every failure a handler can surface. The `IntoResponse` impl is the
/// single place where error kinds become HTTP statuses and the JSON
/// error envelope `{"success": false, "error": code, "message": text}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    Internal,
    Database(sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // Store failures surface as unprocessable, matching the
            // contract existing clients expect.
            ApiError::Unprocessable | ApiError::Database(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self.status() {
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            _ => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(error) = &self {
            tracing::error!(%error, "database error");
        }
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::Database(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_map_to_unprocessable() {
        let error = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.message(), "unprocessable");
    }

    #[test]
    fn not_found_envelope_text() {
        assert_eq!(ApiError::NotFound.message(), "resource not found");
        assert_eq!(ApiError::MethodNotAllowed.message(), "method not allowed");
        assert_eq!(ApiError::Internal.message(), "internal server error");
    }
}
