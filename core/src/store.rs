//! Storage collaborator contract and the in-memory reference collection.
//!
//! # Design
//! `TodoStore` is the seam between the request contract and whatever holds
//! the records. The responders only ever see this trait; a deployment backed
//! by a real document database implements it over a driver, while
//! `MemoryStore` implements it over a `Vec` for the server's default state
//! and the test suite. Validation errors never originate here — `StoreError`
//! carries infrastructure failure only, and "record absent" is an ordinary
//! return value.

use std::error::Error;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::{NewTodo, Todo, TodoId};

pub type StoreResult<T> = Result<T, StoreError>;

/// Infrastructure failure inside the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing database could not be reached or answered with an error.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(detail) => write!(f, "storage unavailable: {detail}"),
        }
    }
}

impl Error for StoreError {}

/// Persistence contract for todo records.
///
/// Implementations assign identifiers and timestamps on insert and preserve
/// insertion order when listing.
pub trait TodoStore {
    /// Persists a new record, assigning its id and timestamps.
    fn insert(&mut self, new: NewTodo) -> StoreResult<TodoId>;

    /// Returns every record in insertion order.
    fn list_all(&self) -> StoreResult<Vec<Todo>>;

    /// Looks up one record by id.
    fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>>;

    /// Removes one record by id. Returns `false` when no record had the id.
    fn delete_by_id(&mut self, id: &TodoId) -> StoreResult<bool>;
}

/// In-memory todo collection.
///
/// Vec-backed so list order is insertion order. Ids use the generated
/// document format and timestamps are truncated to millisecond precision,
/// matching what the wire rendering can represent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: Vec<Todo>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    fn insert(&mut self, new: NewTodo) -> StoreResult<TodoId> {
        // Ids must stay unique across the collection; regenerate on collision.
        let mut id = TodoId::generate();
        while self.todos.iter().any(|todo| todo.id == id) {
            id = TodoId::generate();
        }

        let now = now_millis();
        self.todos.push(Todo {
            id: id.clone(),
            title: new.title,
            completed: false,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    fn list_all(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        Ok(self.todos.iter().find(|todo| &todo.id == id).cloned())
    }

    fn delete_by_id(&mut self, id: &TodoId) -> StoreResult<bool> {
        match self.todos.iter().position(|todo| &todo.id == id) {
            Some(index) => {
                self.todos.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Current time truncated to milliseconds, so stored timestamps round-trip
/// exactly through the wire rendering.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
