//! HTTP service over a shared `TodoStore`.
//!
//! # Design
//! The store is injected into the router as `Arc<TodoStore>` state. Store
//! calls do synchronous file I/O under a std mutex, so handlers run them on
//! tokio's blocking pool. Request-shape checks (id, body, empty patch) live
//! here; domain rules stay in the store.

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tokio::net::TcpListener;
use todo_core::{CreateTodo, StoreError, TodoItem, TodoStore, UpdateTodo};

pub use config::Config;
pub use error::{AppError, StartupError};

pub fn app(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .layer(axum::middleware::from_fn(middleware::catch_panic))
        .layer(axum::middleware::from_fn(middleware::cors))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: Arc<TodoStore>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Opens the store named by `config`, binds, and serves until the process
/// is stopped.
pub async fn start(config: Config) -> Result<(), StartupError> {
    let store = Arc::new(TodoStore::open(&config.data_file)?);
    let addr = config.addr();
    let io_err = |source: std::io::Error| StartupError::Io {
        addr: addr.clone(),
        source,
    };

    let listener = TcpListener::bind(&addr).await.map_err(io_err)?;
    tracing::info!(
        %addr,
        data_file = %store.path().display(),
        todos = store.list().len(),
        "listening"
    );
    run(listener, store).await.map_err(io_err)
}

/// Runs `op` against the store on the blocking pool.
async fn with_store<T, F>(store: Arc<TodoStore>, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&TodoStore) -> Result<T, StoreError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || op(store.as_ref())).await?;
    Ok(result?)
}

/// Any integer is a well-formed id; negative ones simply match no todo.
fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<u64, AppError> {
    let Path(id) = id.map_err(|_| AppError::BadRequest("invalid id"))?;
    u64::try_from(id).map_err(|_| AppError::NotFound)
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(body)| body)
        .map_err(|_| AppError::BadRequest("invalid request body"))
}

async fn list_todos(State(store): State<Arc<TodoStore>>) -> Result<Json<Vec<TodoItem>>, AppError> {
    let todos = with_store(store, |s| Ok(s.list())).await?;
    Ok(Json(todos))
}

async fn create_todo(
    State(store): State<Arc<TodoStore>>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItem>), AppError> {
    let input = parse_body(body)?;
    let todo = with_store(store, move |s| s.create(&input.title)).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<Arc<TodoStore>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<TodoItem>, AppError> {
    let id = parse_id(id)?;
    let patch = parse_body(body)?;
    if patch.is_empty() {
        return Err(AppError::BadRequest("no fields to update"));
    }

    let todo = with_store(store, move |s| s.update(id, patch)).await?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<Arc<TodoStore>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(id)?;
    with_store(store, move |s| s.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
