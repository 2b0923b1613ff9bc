use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::StoreError;

/// Error returned by request handlers, rendered as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed id, body or empty patch. Rejected before the store is called.
    #[error("{0}")]
    BadRequest(&'static str),

    /// Well-formed id that cannot belong to any todo, e.g. a negative one.
    #[error("todo not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The blocking store task panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A handler panicked outside the store task.
    #[error("internal server error")]
    Panicked,
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to open todo store: {0}")]
    Store(#[from] StoreError),

    #[error("failed to serve on {addr}: {source}")]
    Io {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Store(StoreError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound | AppError::Store(StoreError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Store(_) | AppError::Task(_) | AppError::Panicked => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Store(StoreError::NotFound(_)) => "todo not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody { message: self.message() })).into_response()
    }
}
