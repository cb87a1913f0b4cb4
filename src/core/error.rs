use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Wire-level error envelope: `{success: false, error: <code>, message: <text>}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    fn new(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "Resource Not Found",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
            _ => "An error has occurred, please try again",
        };

        Self {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }
    }
}

impl AppError {
    /// Coerce a database failure into an endpoint-specific error category,
    /// leaving every other variant untouched. Handlers use this to report
    /// write failures as 422/400/500 depending on the operation.
    pub fn db_as(self, to: fn(String) -> AppError) -> AppError {
        match self {
            AppError::Database(e) => to(e.to_string()),
            other => other,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal causes are logged, never leaked to the wire
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            _ => {}
        }

        let status = self.status_code();
        (status, Json(ErrorBody::new(status))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let status = err.status_code();
        let body = serde_json::to_value(ErrorBody::new(status)).unwrap();
        (status, body)
    }

    #[test]
    fn not_found_envelope() {
        let (status, body) = body_json(AppError::NotFound("question 99".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": 404,
                "message": "Resource Not Found"
            })
        );
    }

    #[test]
    fn bad_request_envelope() {
        let (status, body) = body_json(AppError::BadRequest("missing fields".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], 400);
        assert_eq!(body["message"], "Bad Request");
    }

    #[test]
    fn unprocessable_envelope() {
        let (status, body) = body_json(AppError::Unprocessable("delete failed".into()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "Unprocessable");
    }

    #[test]
    fn internal_envelope() {
        let (status, body) = body_json(AppError::Internal("boom".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "An error has occurred, please try again");
    }

    #[test]
    fn db_as_rewrites_only_database_errors() {
        let db = AppError::Database(sqlx::Error::RowNotFound);
        assert!(matches!(
            db.db_as(AppError::Unprocessable),
            AppError::Unprocessable(_)
        ));

        let nf = AppError::NotFound("x".into());
        assert!(matches!(
            nf.db_as(AppError::Unprocessable),
            AppError::NotFound(_)
        ));
    }
}
