//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Create the axum router with a catch-all into the dispatch handler
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - All requests funnel through one dispatch handler that consults the
//!   crate's own route table; axum never sees individual routes, so 404
//!   behavior belongs entirely to this crate
//! - Store and route table are injected at construction; no globals

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::{handlers, response};
use crate::observability::metrics;
use crate::routing::RouteTable;
use crate::store::TodoStore;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub store: Arc<dyn TodoStore>,
    pub greeting: String,
    pub max_body_bytes: usize,
}

/// HTTP server for the todo API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: &ServerConfig, store: Arc<dyn TodoStore>) -> Self {
        let state = AppState {
            routes: Arc::new(RouteTable::todo_api()),
            store,
            greeting: config.greeting.resolved_name().to_string(),
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server started");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: resolve via the route table, dispatch, record metrics.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Dispatching request"
    );

    let response = match state.routes.match_route(&method, &path) {
        Some(matched) => handlers::handle(&state, matched, request).await,
        None => {
            tracing::debug!(request_id = %request_id, method = %method, path = %path, "No route matched");
            response::not_found()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
