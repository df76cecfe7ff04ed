//! Handlers for `/InsertingInstructor`.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use registrar_core::forms::InstructorInsertionForm;
use registrar_core::validation::{self, FieldErrors};
use registrar_db::models::instructor::CreateInstructor;
use registrar_db::repositories::InstructorRepo;

use super::submitted;
use crate::error::AppResult;
use crate::flash::{self, Flash};
use crate::state::AppState;
use crate::views::pages;

/// GET /InsertingInstructor
pub async fn show() -> Html<String> {
    Html(pages::instructor_form(
        &InstructorInsertionForm::default(),
        &FieldErrors::default(),
    ))
}

/// POST /InsertingInstructor
pub async fn insert(
    State(state): State<AppState>,
    form: Result<Form<InstructorInsertionForm>, FormRejection>,
) -> AppResult<Response> {
    let form = submitted(form)?;

    if let Err(errors) = validation::check(&form) {
        tracing::debug!(%errors, "Instructor form rejected");
        return Ok(Html(pages::instructor_form(&form, &errors)).into_response());
    }

    let instructor = InstructorRepo::create(&state.pool, &CreateInstructor::from(form)).await?;

    tracing::info!(
        instructor_id = %instructor.ins_id,
        instructor_name = %instructor.ins_name,
        "Instructor added",
    );

    Ok(flash::redirect_with(Flash::InstructorAdded, "/"))
}
