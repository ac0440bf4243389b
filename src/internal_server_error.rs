//! Defines the page to display when a request fails on the server side.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The 500 page. The cause is only ever written to the logs.
pub fn get_internal_server_error_response() -> Response {
    let page = error_view(
        "Internal Server Error",
        "500",
        "Sorry, something went wrong.",
        "Try again later or check the server logs.",
    );

    (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
}
