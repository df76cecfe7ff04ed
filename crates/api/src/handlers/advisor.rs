//! Handlers for `/InsertingAdvisor`.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use registrar_core::forms::AdvisorInsertionForm;
use registrar_core::validation::{self, FieldErrors};
use registrar_db::models::advisor::CreateAdvisor;
use registrar_db::repositories::AdvisorRepo;

use super::submitted;
use crate::error::AppResult;
use crate::flash::{self, Flash};
use crate::state::AppState;
use crate::views::pages;

/// GET /InsertingAdvisor
pub async fn show() -> Html<String> {
    Html(pages::advisor_form(
        &AdvisorInsertionForm::default(),
        &FieldErrors::default(),
    ))
}

/// POST /InsertingAdvisor
///
/// Unknown instructor or student ids fail the advisor foreign keys; an
/// instructor who already advises someone fails the primary key.
pub async fn insert(
    State(state): State<AppState>,
    form: Result<Form<AdvisorInsertionForm>, FormRejection>,
) -> AppResult<Response> {
    let form = submitted(form)?;

    if let Err(errors) = validation::check(&form) {
        tracing::debug!(%errors, "Advisor form rejected");
        return Ok(Html(pages::advisor_form(&form, &errors)).into_response());
    }

    let advisor = AdvisorRepo::create(&state.pool, &CreateAdvisor::from(form)).await?;

    tracing::info!(
        instructor_id = %advisor.adv_id,
        student_id = %advisor.st_id,
        "Advisor appointed",
    );

    Ok(flash::redirect_with(Flash::AdvisorAdded, "/"))
}
