//! Todo HTTP Server Library

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;
pub mod store;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use store::{Todo, TodoStore};
