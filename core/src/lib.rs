//! Request-validation and response-contract core for the todos service.
//!
//! # Overview
//! Decides, for each inbound operation (list / create / delete), whether the
//! request may proceed and exactly which status code and JSON body it
//! produces. Storage is an injected collaborator behind the `TodoStore`
//! trait, and responses are plain data (`ApiResponse`), so the whole
//! contract is deterministic and testable without an HTTP framework.
//!
//! # Design
//! - One responder function per operation; checks run in a fixed order
//!   (missing parameter, then malformed, then unresolvable) and only the
//!   first failure is reported.
//! - The error taxonomy is three kinds — missing (422), invalid (400),
//!   not found (404) — each rendering one `{ "errorMsg": ... }` body.
//! - Storage infrastructure failures are outside the taxonomy; responders
//!   fold them into a generic 500 and log the detail.
//! - The host converts `ApiResponse` values at a single point, which is
//!   where the JSON content type on every path comes from.

pub mod api;
pub mod error;
pub mod response;
pub mod store;
pub mod types;

pub use api::{create_todo, delete_todo, list_todos};
pub use error::ApiError;
pub use response::{ApiResponse, CreatedBody, DeletedBody, ErrorBody};
pub use store::{MemoryStore, StoreError, StoreResult, TodoStore};
pub use types::{CreateParams, InvalidTodoId, NewTodo, Param, Todo, TodoId};
