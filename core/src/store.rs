//! JSON-file backed todo store.
//!
//! # Design
//! `TodoStore` owns the authoritative list behind a single `Mutex`. Every
//! operation, `list` included, holds the lock for its whole duration, and
//! mutating operations rewrite the entire backing file before releasing it.
//! Operations are therefore strictly serialized and id assignment follows
//! lock acquisition order.
//!
//! The next id is not persisted. It is derived on open as `max(id) + 1`;
//! once `u64::MAX` has been handed out, `create` reports
//! `StoreError::IdsExhausted`.
//!
//! A failed write leaves the in-memory change in place and reports
//! `StoreError::Persistence`; a later successful write brings the file back
//! in line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::types::{TodoItem, UpdateTodo};

const TITLE_REQUIRED: &str = "title is required";

#[derive(Debug)]
struct Inner {
    todos: Vec<TodoItem>,
    /// `None` once an item holds `u64::MAX`; no further id can be issued.
    next_id: Option<u64>,
}

/// Thread-safe todo collection persisted as a JSON array.
#[derive(Debug)]
pub struct TodoStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl TodoStore {
    /// Opens the store at `path`, creating its parent directory if needed.
    ///
    /// A missing or empty file yields an empty store.
    ///
    /// # Errors
    /// - `StoreError::Load` when the directory cannot be created or the file
    ///   cannot be read.
    /// - `StoreError::DataCorruption` when the file is not a JSON array of
    ///   todos.
    ///
    /// A file holding `u64::MAX` as an id opens normally, but every later
    /// `create` fails with `StoreError::IdsExhausted`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let todos = load(&path)?;
        let next_id = match todos.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Ok(Self {
            path,
            inner: Mutex::new(Inner { todos, next_id }),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a copy of every todo in insertion order.
    pub fn list(&self) -> Vec<TodoItem> {
        self.lock().todos.clone()
    }

    /// Appends a new, not yet completed todo and persists the collection.
    pub fn create(&self, title: &str) -> Result<TodoItem, StoreError> {
        if title.is_empty() {
            return Err(StoreError::Validation(TITLE_REQUIRED.to_string()));
        }

        let mut inner = self.lock();
        let id = inner.next_id.ok_or(StoreError::IdsExhausted)?;
        let todo = TodoItem {
            id,
            title: title.to_string(),
            completed: false,
        };
        inner.next_id = id.checked_add(1);
        inner.todos.push(todo.clone());

        self.save(&inner.todos)?;
        Ok(todo)
    }

    /// Applies the fields set in `patch` to the todo with `id`.
    pub fn update(&self, id: u64, patch: UpdateTodo) -> Result<TodoItem, StoreError> {
        let mut inner = self.lock();
        let idx = position(&inner.todos, id)?;

        if patch.title.as_deref() == Some("") {
            return Err(StoreError::Validation(TITLE_REQUIRED.to_string()));
        }

        let todo = &mut inner.todos[idx];
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        let updated = todo.clone();

        self.save(&inner.todos)?;
        Ok(updated)
    }

    /// Removes the todo with `id`, keeping the order of the rest.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let idx = position(&inner.todos, id)?;
        inner.todos.remove(idx);

        self.save(&inner.todos)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Inner is never left half-updated across a panic point.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save(&self, todos: &[TodoItem]) -> Result<(), StoreError> {
        let persistence = |source: io::Error| StoreError::Persistence {
            path: self.path.clone(),
            source,
        };
        let payload = serde_json::to_vec_pretty(todos).map_err(|e| persistence(e.into()))?;
        fs::write(&self.path, payload).map_err(persistence)
    }
}

fn load(path: &Path) -> Result<Vec<TodoItem>, StoreError> {
    let load_err = |source: io::Error| StoreError::Load {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(load_err)?;
    }

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(load_err(err)),
    };
    if data.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&data).map_err(|source| StoreError::DataCorruption {
        path: path.to_path_buf(),
        source,
    })
}

fn position(todos: &[TodoItem], id: u64) -> Result<usize, StoreError> {
    todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(StoreError::NotFound(id))
}
