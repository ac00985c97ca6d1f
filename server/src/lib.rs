use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use todos_core::{api, ApiResponse, CreateParams, MemoryStore};

pub type Db = Arc<RwLock<MemoryStore>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(MemoryStore::new()));
    Router::new()
        // DELETE without a path segment must reach the contract's
        // missing-parameter path, so it is wired explicitly.
        .route(
            "/todos",
            get(list_todos).post(create_todo).delete(delete_without_id),
        )
        .route("/todos/{id}", delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Single exit point for every handler; the JSON content type on success
/// and error paths alike comes from here.
fn to_response(api: ApiResponse) -> Response {
    let status = StatusCode::from_u16(api.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(api.body)).into_response()
}

async fn list_todos(State(db): State<Db>) -> Response {
    let store = db.read().await;
    to_response(api::list_todos(&*store))
}

async fn create_todo(State(db): State<Db>, body: Bytes) -> Response {
    let params = CreateParams::from_bytes(&body);
    let mut store = db.write().await;
    to_response(api::create_todo(&mut *store, &params))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let mut store = db.write().await;
    to_response(api::delete_todo(&mut *store, Some(&id)))
}

async fn delete_without_id(State(db): State<Db>) -> Response {
    let mut store = db.write().await;
    to_response(api::delete_todo(&mut *store, None))
}
