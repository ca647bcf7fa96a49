//! Endpoint handlers.
//!
//! # Responsibilities
//! - Parse request bodies where an endpoint needs one
//! - Invoke the store and map its result enums onto HTTP responses
//! - Keep the greeting endpoints trivial
//!
//! # Design Decisions
//! - Handlers receive the already-matched endpoint plus any captured id;
//!   they never inspect the path themselves
//! - Store not-found values become 404; store/JSON errors become the
//!   generic 500 (see response.rs)

use axum::body::Body;
use axum::http::Request;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::http::response;
use crate::http::server::AppState;
use crate::routing::{Endpoint, RouteMatch};
use crate::store::{DeleteResult, UpdateResult};

#[derive(Debug, Deserialize)]
struct CreateTodoBody {
    text: String,
}

#[derive(Debug, Deserialize)]
struct UpdateTodoBody {
    text: String,
    completed: bool,
}

/// Dispatch a matched route to its endpoint logic.
pub async fn handle(state: &AppState, matched: RouteMatch, request: Request<Body>) -> Response {
    match matched.endpoint {
        Endpoint::Home => home(state),
        Endpoint::Demo => demo(),
        Endpoint::ListTodos => list_todos(state),
        Endpoint::CreateTodo => create_todo(state, request).await,
        Endpoint::UpdateTodo => match matched.id {
            Some(id) => update_todo(state, &id, request).await,
            None => response::internal_error("update", "route matched without an id"),
        },
        Endpoint::DeleteTodo => match matched.id {
            Some(id) => delete_todo(state, &id),
            None => response::internal_error("delete", "route matched without an id"),
        },
    }
}

/// `GET /` — HTML greeting. The configured name is interpolated verbatim.
fn home(state: &AppState) -> Response {
    Html(format!(
        "<h1 style=\"color: red\">Hello, {}</h1>",
        state.greeting
    ))
    .into_response()
}

/// `GET /demo` — plain text greeting.
fn demo() -> Response {
    "Hello from demo!".into_response()
}

/// `GET /todo` — every record as a JSON array.
fn list_todos(state: &AppState) -> Response {
    match state.store.list() {
        Ok(todos) => Json(todos).into_response(),
        Err(e) => response::internal_error("list", e),
    }
}

/// `POST /todo` — create from `{"text": ...}`, echo the stored record.
async fn create_todo(state: &AppState, request: Request<Body>) -> Response {
    let body: CreateTodoBody = match read_json(state, request).await {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    match state.store.create(&body.text) {
        Ok(todo) => Json(todo).into_response(),
        Err(e) => response::internal_error("create", e),
    }
}

/// `PUT /todo/<id>` — replace text/completed; 404 when the id is unknown.
async fn update_todo(state: &AppState, id: &str, request: Request<Body>) -> Response {
    let body: UpdateTodoBody = match read_json(state, request).await {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    match state.store.update(id, &body.text, body.completed) {
        Ok(UpdateResult::Updated(todo)) => Json(todo).into_response(),
        Ok(UpdateResult::NotFound) => response::not_found(),
        Err(e) => response::internal_error("update", e),
    }
}

/// `DELETE /todo/<id>` — empty 200, or 404 when the id is unknown.
fn delete_todo(state: &AppState, id: &str) -> Response {
    match state.store.delete(id) {
        Ok(DeleteResult::Deleted) => ().into_response(),
        Ok(DeleteResult::NotFound) => response::not_found(),
        Err(e) => response::internal_error("delete", e),
    }
}

/// Buffer and deserialize a JSON body. Malformed input gets the generic
/// server error; there is no structured validation beyond the field types.
async fn read_json<T: serde::de::DeserializeOwned>(
    state: &AppState,
    request: Request<Body>,
) -> Result<T, Response> {
    let bytes = axum::body::to_bytes(request.into_body(), state.max_body_bytes)
        .await
        .map_err(|e| response::internal_error("body read", e))?;
    serde_json::from_slice(&bytes).map_err(|e| response::internal_error("body parse", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteTable;
    use crate::store::{MemoryTodoStore, Todo};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            routes: Arc::new(RouteTable::todo_api()),
            store: Arc::new(MemoryTodoStore::new()),
            greeting: "tester".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }

    fn empty_request() -> Request<Body> {
        Request::builder().body(Body::empty()).unwrap()
    }

    fn json_request(json: &str) -> Request<Body> {
        Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn home_interpolates_greeting_unescaped() {
        let state = test_state();
        let response = home(&state);

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            bytes.as_ref(),
            b"<h1 style=\"color: red\">Hello, tester</h1>"
        );
    }

    #[tokio::test]
    async fn create_then_update_then_delete_flow() {
        let state = test_state();

        let created = create_todo(&state, json_request(r#"{"text":"buy milk"}"#)).await;
        assert_eq!(created.status(), StatusCode::OK);
        let created: Todo = serde_json::from_value(body_json(created).await).unwrap();
        assert_eq!(created.text, "buy milk");
        assert!(!created.completed);

        let updated = update_todo(
            &state,
            &created.id,
            json_request(r#"{"text":"buy oat milk","completed":true}"#),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let updated: Todo = serde_json::from_value(body_json(updated).await).unwrap();
        assert_eq!(updated.id, created.id);
        assert!(updated.completed);

        assert_eq!(delete_todo(&state, &created.id).status(), StatusCode::OK);
        assert_eq!(
            delete_todo(&state, &created.id).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn update_unknown_id_is_404_and_creates_nothing() {
        let state = test_state();
        let response = update_todo(
            &state,
            "missing",
            json_request(r#"{"text":"x","completed":false}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(state.store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_surfaces_as_generic_server_error() {
        let state = test_state();
        let response = create_todo(&state, json_request("{not json")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unmatched_id_slot_is_a_server_error_not_a_panic() {
        let state = test_state();
        let matched = RouteMatch {
            endpoint: Endpoint::DeleteTodo,
            id: None,
        };
        let response = handle(&state, matched, empty_request()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
