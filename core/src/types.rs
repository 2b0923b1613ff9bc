//! Domain DTOs shared by the store, the HTTP service and the client.
//!
//! # Design
//! `TodoItem` is both the in-memory record and the on-disk/wire shape: the
//! backing file is a JSON array of exactly these objects. `UpdateTodo` uses
//! one `Option` per field so "omitted" and "set to false/empty" stay
//! distinguishable.

use serde::{Deserialize, Serialize};

/// A single todo item. Identifiers are assigned by `TodoStore`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Partial update for an existing todo. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}
