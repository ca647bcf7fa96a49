//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → server.rs (axum catch-all + middleware)
//!     → routing (route table match)
//!     → handlers.rs (endpoint logic, store calls)
//!     → response.rs (404 / 500 mapping)
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
