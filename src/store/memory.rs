//! In-memory todo store.
//!
//! State lives in a `HashMap` and is reset on restart. Ids are UUID v4 so
//! they stay unique across the whole process lifetime even after deletes.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use super::{DeleteResult, StoreError, Todo, TodoStore, UpdateResult};

/// HashMap-backed store. Cheap to construct, used by tests and the
/// `memory` backend configuration.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    todos: Mutex<HashMap<String, Todo>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<String, Todo>> {
        // A poisoned lock means a handler panicked mid-call; the map itself
        // is still coherent because every mutation is a single insert/remove.
        self.todos.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TodoStore for MemoryTodoStore {
    fn create(&self, text: &str) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
        };
        self.guard().insert(todo.id.clone(), todo.clone());
        Ok(todo)
    }

    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.guard().values().cloned().collect())
    }

    fn update(&self, id: &str, text: &str, completed: bool) -> Result<UpdateResult, StoreError> {
        match self.guard().get_mut(id) {
            Some(todo) => {
                todo.text = text.to_string();
                todo.completed = completed;
                Ok(UpdateResult::Updated(todo.clone()))
            }
            None => Ok(UpdateResult::NotFound),
        }
    }

    fn delete(&self, id: &str) -> Result<DeleteResult, StoreError> {
        match self.guard().remove(id) {
            Some(_) => Ok(DeleteResult::Deleted),
            None => Ok(DeleteResult::NotFound),
        }
    }
}
