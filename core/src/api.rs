//! Request validation and response shaping for the todos operations.
//!
//! # Design
//! One responder per operation, mirroring the HTTP surface. Each takes the
//! storage collaborator plus the operation's parameters and always returns
//! an `ApiResponse` — validation failures, lookup misses, and storage
//! failures are all folded into the response contract here, so the host
//! never branches on error kinds. Checks run in a fixed order (missing,
//! then malformed, then unresolvable) and only the first failure is
//! reported.

use crate::error::ApiError;
use crate::response::{ApiResponse, CreatedBody, DeletedBody};
use crate::store::{StoreError, TodoStore};
use crate::types::{CreateParams, NewTodo, Param, TodoId};

/// List every todo in insertion order.
pub fn list_todos<S: TodoStore>(store: &S) -> ApiResponse {
    match store.list_all() {
        Ok(todos) => ApiResponse::ok(&todos),
        Err(err) => storage_failure("list", &err),
    }
}

/// Create a todo from the request parameters.
///
/// An absent `title` key always reports the missing-parameter error, never
/// the invalid one. A present title must be a non-empty string; persisted
/// records never hold an empty title.
pub fn create_todo<S: TodoStore>(store: &mut S, params: &CreateParams) -> ApiResponse {
    let title = match &params.title {
        Param::Missing => return ApiError::MissingParameter("title").into(),
        Param::Invalid => return ApiError::InvalidParameter("title").into(),
        Param::Value(title) if title.is_empty() => {
            return ApiError::InvalidParameter("title").into()
        }
        Param::Value(title) => title.clone(),
    };

    match store.insert(NewTodo { title }) {
        Ok(id) => ApiResponse::ok(&CreatedBody { id }),
        Err(err) => storage_failure("create", &err),
    }
}

/// Delete the todo named by the `id` path parameter.
///
/// `None` means the route was invoked without a path segment. The id is
/// syntax-checked before the store is consulted, so a malformed id never
/// reports not-found.
pub fn delete_todo<S: TodoStore>(store: &mut S, id: Option<&str>) -> ApiResponse {
    let raw = match id {
        Some(raw) => raw,
        None => return ApiError::MissingParameter("id").into(),
    };

    let id = match TodoId::parse(raw) {
        Ok(id) => id,
        Err(_) => return ApiError::InvalidParameter("id").into(),
    };

    match store.delete_by_id(&id) {
        Ok(true) => ApiResponse::ok(&DeletedBody::new(&id)),
        Ok(false) => ApiError::NotFound(id.to_string()).into(),
        Err(err) => storage_failure("delete", &err),
    }
}

/// Fold a storage failure into the generic 500, keeping the detail in the
/// log rather than on the wire.
fn storage_failure(operation: &'static str, err: &StoreError) -> ApiResponse {
    tracing::error!(operation, error = %err, "storage collaborator failed");
    ApiResponse::internal_error()
}
