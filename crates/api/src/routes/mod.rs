pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{advisor, instructor, menu, search, student};
use crate::state::AppState;

/// Build the page route tree.
///
/// Every page accepts both methods: `GET` displays, `POST` submits.
///
/// ```text
/// /                       landing page (menu + flash)
/// /InsertingStudent       student form     -> insert, redirect to /
/// /InsertingInstructor    instructor form  -> insert, redirect to /
/// /InsertingAdvisor       advisor form     -> insert, redirect to /
/// /StudentSearch          all students     -> filtered by name
/// /InstructorSearch       all instructors  -> filtered by name
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::index).post(menu::index))
        .route(
            "/InsertingStudent",
            get(student::show).post(student::insert),
        )
        .route(
            "/InsertingInstructor",
            get(instructor::show).post(instructor::insert),
        )
        .route(
            "/InsertingAdvisor",
            get(advisor::show).post(advisor::insert),
        )
        .route(
            "/StudentSearch",
            get(search::students).post(search::search_students),
        )
        .route(
            "/InstructorSearch",
            get(search::instructors).post(search::search_instructors),
        )
}
