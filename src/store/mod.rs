//! Todo persistence subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → TodoStore trait (create / list / update / delete)
//!     → memory.rs (HashMap behind a mutex, UUID ids)
//!     → sqlite.rs (single-file database, autoincrement ids)
//! ```
//!
//! # Design Decisions
//! - Store is constructed at startup and injected into the server; no globals
//! - Not-found is a value (`UpdateResult::NotFound`), not an error —
//!   only genuine storage failures travel the `Err` path
//! - Backends are interchangeable behind `Arc<dyn TodoStore>`

pub mod memory;
pub mod sqlite;

pub use memory::MemoryTodoStore;
pub use sqlite::SqliteTodoStore;

use serde::{Deserialize, Serialize};

/// The sole domain entity: a text item with a completion flag.
///
/// `id` is assigned by the store and never changes afterwards. The SQLite
/// backend uses autoincrement integers, the memory backend UUIDs; both are
/// exposed as strings on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Outcome of an update attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// The record existed; returns its post-update state.
    Updated(Todo),
    /// No record with that id; nothing was written.
    NotFound,
}

/// Outcome of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResult {
    Deleted,
    NotFound,
}

/// Storage failure. The memory backend never produces one.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Persistence contract for todos.
///
/// Implementations do not retry or recover; a missing record is reported
/// through the result enums so the caller can map it to a 404.
pub trait TodoStore: Send + Sync {
    /// Persist a new record with `completed = false` and a store-assigned id.
    fn create(&self, text: &str) -> Result<Todo, StoreError>;

    /// All records. Order is whatever the backend happens to preserve.
    fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Replace `text` and `completed` on the record matching `id`.
    fn update(&self, id: &str, text: &str, completed: bool) -> Result<UpdateResult, StoreError>;

    /// Remove the record matching `id`.
    fn delete(&self, id: &str) -> Result<DeleteResult, StoreError>;
}
