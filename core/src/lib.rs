//! Todo list core: the JSON-file backed store and an I/O-free API client.
//!
//! # Overview
//! `TodoStore` owns the authoritative todo collection and its backing file.
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! for the HTTP service that fronts the store, leaving the round-trip to the
//! caller.
//!
//! # Design
//! - The store is an explicit instance; callers share it as `Arc<TodoStore>`.
//! - `TodoItem` is the on-disk, in-memory and wire shape at once.
//! - `UpdateTodo` carries one `Option` per field for partial updates.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use types::{CreateTodo, TodoItem, UpdateTodo};
