//! Handler for the landing page.

use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};

use crate::flash;
use crate::views::pages;

/// GET|POST /
///
/// Shows the pending flash message once, then clears its cookie.
pub async fn index(headers: HeaderMap) -> Response {
    let page = Html(pages::menu(flash::pending(&headers)));

    if flash::has_cookie(&headers) {
        ([(SET_COOKIE, flash::clear_cookie())], page).into_response()
    } else {
        page.into_response()
    }
}
