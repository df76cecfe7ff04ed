//! Handlers for `/InsertingStudent`.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use registrar_core::forms::StudentInsertionForm;
use registrar_core::validation::{self, FieldErrors};
use registrar_db::models::student::CreateStudent;
use registrar_db::repositories::StudentRepo;

use super::submitted;
use crate::error::AppResult;
use crate::flash::{self, Flash};
use crate::state::AppState;
use crate::views::pages;

/// GET /InsertingStudent
pub async fn show() -> Html<String> {
    Html(pages::student_form(
        &StudentInsertionForm::default(),
        &FieldErrors::default(),
    ))
}

/// POST /InsertingStudent
///
/// Duplicate id, name, or email is rejected by the database and surfaces
/// through [`crate::error::AppError`].
pub async fn insert(
    State(state): State<AppState>,
    form: Result<Form<StudentInsertionForm>, FormRejection>,
) -> AppResult<Response> {
    let form = submitted(form)?;

    if let Err(errors) = validation::check(&form) {
        tracing::debug!(%errors, "Student form rejected");
        return Ok(Html(pages::student_form(&form, &errors)).into_response());
    }

    let student = StudentRepo::create(&state.pool, &CreateStudent::from(form)).await?;

    tracing::info!(
        student_id = %student.std_id,
        student_name = %student.std_name,
        "Student added",
    );

    Ok(flash::redirect_with(Flash::StudentAdded, "/"))
}
