//! Handlers for `/StudentSearch` and `/InstructorSearch`.
//!
//! Both pages share [`SearchForm`]. Without a valid term they list every
//! row; with one they list rows whose name contains it. Results are always
//! ordered by name.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use registrar_core::forms::SearchForm;
use registrar_core::validation::{self, FieldErrors};
use registrar_db::repositories::{InstructorRepo, StudentRepo};

use super::submitted;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views::pages;

/// The filter to apply, plus any errors to show next to the search box.
fn validated_term(form: &SearchForm) -> (Option<&str>, FieldErrors) {
    match validation::check(form) {
        Ok(()) => (Some(form.term()), FieldErrors::default()),
        Err(errors) => {
            tracing::debug!(%errors, "Search form rejected, listing all rows");
            (None, errors)
        }
    }
}

/// GET /StudentSearch
pub async fn students(State(state): State<AppState>) -> AppResult<Html<String>> {
    let results = StudentRepo::search(&state.pool, None).await?;
    Ok(Html(pages::student_search(
        &SearchForm::default(),
        &FieldErrors::default(),
        &results,
    )))
}

/// POST /StudentSearch
pub async fn search_students(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Html<String>> {
    let form = submitted(form)?;
    let (term, errors) = validated_term(&form);

    let results = StudentRepo::search(&state.pool, term).await?;
    tracing::debug!(term, count = results.len(), "Student search");

    Ok(Html(pages::student_search(&form, &errors, &results)))
}

/// GET /InstructorSearch
pub async fn instructors(State(state): State<AppState>) -> AppResult<Html<String>> {
    let results = InstructorRepo::search(&state.pool, None).await?;
    Ok(Html(pages::instructor_search(
        &SearchForm::default(),
        &FieldErrors::default(),
        &results,
    )))
}

/// POST /InstructorSearch
pub async fn search_instructors(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Html<String>> {
    let form = submitted(form)?;
    let (term, errors) = validated_term(&form);

    let results = InstructorRepo::search(&state.pool, term).await?;
    tracing::debug!(term, count = results.len(), "Instructor search");

    Ok(Html(pages::instructor_search(&form, &errors, &results)))
}
