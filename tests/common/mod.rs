//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use todo_server::config::ServerConfig;
use todo_server::http::HttpServer;
use todo_server::store::TodoStore;

/// Start the server on an ephemeral port and return its address.
pub async fn spawn_server(store: Arc<dyn TodoStore>) -> SocketAddr {
    let config = ServerConfig::default();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&config, store);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
