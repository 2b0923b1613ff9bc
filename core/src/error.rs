//! Error types for the todo store and the API client.
//!
//! # Design
//! `StoreError` separates caller mistakes (`Validation`, `NotFound`) from
//! backing-file failures so the HTTP layer can map them to 4xx and 5xx
//! without inspecting messages. `Load` and `DataCorruption` only occur while
//! opening a store.
//!
//! `ApiError` is the client-side view of the same contract: `NotFound` and
//! `BadRequest` get dedicated variants, every other unexpected status lands
//! in `HttpError` with the raw status code and body.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `TodoStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller-supplied data broke a domain rule, e.g. an empty title.
    #[error("{0}")]
    Validation(String),

    /// No todo with this id exists.
    #[error("todo {0} not found")]
    NotFound(u64),

    /// An existing item already holds the largest representable id.
    #[error("no todo ids left to assign")]
    IdsExhausted,

    /// Writing the backing file failed. The in-memory change is kept.
    #[error("failed to write `{}`: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but is not a JSON array of todos.
    #[error("`{}` is corrupt: {source}", .path.display())]
    DataCorruption {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file or its directory could not be created or read.
    #[error("failed to load `{}`: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request with 400.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The server returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
