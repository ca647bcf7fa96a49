//! SQLite-backed todo store.
//!
//! # Responsibilities
//! - Open or create the single-file database and its `todos` table
//! - Run the four CRUD statements with bound parameters
//! - Report not-found via affected-row counts, never via errors
//!
//! # Design Decisions
//! - One connection behind a mutex; store calls serialize, which matches the
//!   "requests are handled one at a time" model of this server
//! - `completed` is persisted as 0/1 and converted at the row boundary
//! - Ids are autoincrement integers, exposed as strings on the wire

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension};

use super::{DeleteResult, StoreError, Todo, TodoStore, UpdateResult};

/// Single-connection SQLite store.
pub struct SqliteTodoStore {
    conn: Mutex<Connection>,
}

impl SqliteTodoStore {
    /// Open (creating if absent) the database file and ensure the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn guard(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    let id: i64 = row.get("id")?;
    let completed: i64 = row.get("completed")?;
    Ok(Todo {
        id: id.to_string(),
        text: row.get("text")?,
        completed: completed != 0,
    })
}

impl TodoStore for SqliteTodoStore {
    fn create(&self, text: &str) -> Result<Todo, StoreError> {
        let conn = self.guard();
        let todo = conn.query_row(
            "INSERT INTO todos (text, completed) VALUES (?1, 0)
             RETURNING id, text, completed;",
            params![text],
            row_to_todo,
        )?;
        Ok(todo)
    }

    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let conn = self.guard();
        let mut stmt = conn.prepare("SELECT id, text, completed FROM todos;")?;
        let rows = stmt.query_map([], row_to_todo)?;
        let todos = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(todos)
    }

    fn update(&self, id: &str, text: &str, completed: bool) -> Result<UpdateResult, StoreError> {
        let conn = self.guard();
        let changed = conn.execute(
            "UPDATE todos SET text = ?1, completed = ?2 WHERE id = ?3;",
            params![text, completed as i64, id],
        )?;
        if changed == 0 {
            return Ok(UpdateResult::NotFound);
        }

        let todo = conn
            .query_row(
                "SELECT id, text, completed FROM todos WHERE id = ?1;",
                params![id],
                row_to_todo,
            )
            .optional()?;
        match todo {
            Some(todo) => Ok(UpdateResult::Updated(todo)),
            // Row vanished between statements; treat as the miss it is.
            None => Ok(UpdateResult::NotFound),
        }
    }

    fn delete(&self, id: &str) -> Result<DeleteResult, StoreError> {
        let conn = self.guard();
        let changed = conn.execute("DELETE FROM todos WHERE id = ?1;", params![id])?;
        if changed == 0 {
            Ok(DeleteResult::NotFound)
        } else {
            Ok(DeleteResult::Deleted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_returns_sequential_string_ids() {
        let store = SqliteTodoStore::open_in_memory().unwrap();
        let first = store.create("buy milk").unwrap();
        let second = store.create("buy bread").unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert!(!first.completed);
    }

    #[test]
    fn update_persists_text_and_completed_flag() {
        let store = SqliteTodoStore::open_in_memory().unwrap();
        let created = store.create("buy milk").unwrap();

        let result = store.update(&created.id, "buy oat milk", true).unwrap();
        assert_eq!(
            result,
            UpdateResult::Updated(Todo {
                id: created.id.clone(),
                text: "buy oat milk".to_string(),
                completed: true,
            })
        );

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].completed);
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let store = SqliteTodoStore::open_in_memory().unwrap();
        assert_eq!(
            store.update("99", "x", false).unwrap(),
            UpdateResult::NotFound
        );
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn delete_reports_not_found_after_removal() {
        let store = SqliteTodoStore::open_in_memory().unwrap();
        let created = store.create("once").unwrap();

        assert_eq!(store.delete(&created.id).unwrap(), DeleteResult::Deleted);
        assert_eq!(store.delete(&created.id).unwrap(), DeleteResult::NotFound);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = SqliteTodoStore::open_in_memory().unwrap();
        let first = store.create("a").unwrap();
        store.delete(&first.id).unwrap();
        let second = store.create("b").unwrap();
        assert_ne!(first.id, second.id);
    }
}
