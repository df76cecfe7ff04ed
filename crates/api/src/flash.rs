//! One-shot notices carried across the post-insert redirect.
//!
//! The `flash` cookie stores a fixed message key, never free text, so the
//! value needs no encoding and cannot be used to inject markup.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};

/// Cookie name holding the pending message key.
pub const COOKIE_NAME: &str = "flash";

/// A message shown once on the next landing-page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    StudentAdded,
    InstructorAdded,
    AdvisorAdded,
}

impl Flash {
    pub fn key(self) -> &'static str {
        match self {
            Flash::StudentAdded => "student_added",
            Flash::InstructorAdded => "instructor_added",
            Flash::AdvisorAdded => "advisor_added",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "student_added" => Some(Flash::StudentAdded),
            "instructor_added" => Some(Flash::InstructorAdded),
            "advisor_added" => Some(Flash::AdvisorAdded),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::StudentAdded => "Student has been added successfully!",
            Flash::InstructorAdded => "Instructor has been added successfully!",
            Flash::AdvisorAdded => "Advisor appointed successfully!",
        }
    }

    /// Styling category; every current message is a success notice.
    pub fn category(self) -> &'static str {
        "success"
    }

    fn set_cookie(self) -> HeaderValue {
        HeaderValue::from_static(match self {
            Flash::StudentAdded => "flash=student_added; Path=/; HttpOnly; SameSite=Lax",
            Flash::InstructorAdded => "flash=instructor_added; Path=/; HttpOnly; SameSite=Lax",
            Flash::AdvisorAdded => "flash=advisor_added; Path=/; HttpOnly; SameSite=Lax",
        })
    }
}

/// `Set-Cookie` value that removes any pending message.
pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Read the pending message from the request's `Cookie` headers.
///
/// Returns `None` when no `flash` cookie is present or its key is unknown.
pub fn pending(headers: &HeaderMap) -> Option<Flash> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| Flash::from_key(value.trim()))
}

/// Whether the request carries a `flash` cookie at all (known key or not).
pub fn has_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .any(|pair| pair.trim().starts_with("flash="))
}

/// `303 See Other` to `to`, queueing `flash` for the next page.
pub fn redirect_with(flash: Flash, to: &str) -> Response {
    ([(SET_COOKIE, flash.set_cookie())], Redirect::to(to)).into_response()
}
