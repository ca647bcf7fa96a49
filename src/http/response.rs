//! Response mapping for the failure paths.
//!
//! # Design Decisions
//! - The 404 body is fixed (`Not Found`), matching the router's contract
//! - Everything that is not a not-found collapses into a generic 500;
//!   detail goes to the log, never to the client

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// The one and only not-found response.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Log the failure and return the generic server error.
pub fn internal_error(context: &str, error: impl std::fmt::Display) -> Response {
    tracing::error!(context = context, error = %error, "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
