use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use registrar_core::error::CoreError;
use registrar_db::constraint;

use crate::views::pages;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to render the generic HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `registrar_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Constraint violations are classified when
    /// the response is built.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => match constraint::classify(&err) {
                Some(violation) => {
                    tracing::warn!(
                        constraint = violation.constraint(),
                        "Write rejected by database constraint"
                    );
                    classify_core_error(violation.into())
                }
                None => classify_sqlx_error(&err),
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        (status, Html(pages::error(status, code, &message))).into_response()
    }
}

/// Map a domain error to an HTTP status, error code, and message.
fn classify_core_error(err: CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
        CoreError::MissingReference(msg) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_REFERENCE", msg)
        }
        CoreError::InvalidValue(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_VALUE", msg),
    }
}

/// A sqlx error that is not a constraint violation: logged, then reported
/// as a 500 without its detail.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
