//! One module per use case. Each form handler has two states:
//!
//! - **Display**: `GET`, or `POST` that fails validation, renders the form
//!   with any field errors and no write.
//! - **Committed**: `POST` that passes validation performs exactly one
//!   repository call, then redirects (inserts) or renders results (searches).

pub mod advisor;
pub mod instructor;
pub mod menu;
pub mod search;
pub mod student;

use axum::extract::rejection::FormRejection;
use axum::Form;

use crate::error::{AppError, AppResult};

/// Unwrap a urlencoded body, turning a malformed one into a 400.
pub(crate) fn submitted<T>(form: Result<Form<T>, FormRejection>) -> AppResult<T> {
    form.map(|Form(inner)| inner)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
