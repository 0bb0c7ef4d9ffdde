//! Task use-case service.
//!
//! # Responsibility
//! - Provide single mutation entry points for presentation callers.
//! - Flush the full store to disk after every successful mutation.
//!
//! # Invariants
//! - The task file is loaded exactly once, at `open` time.
//! - Store errors abort before any disk write.
//! - Flush failures surface to the caller after the in-memory change.

use crate::model::task::Task;
use crate::persist::{load_tasks, save_tasks, PersistError};
use crate::store::task_store::{Search, StoreError, TaskStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// In-memory store rejected the operation.
    Store(StoreError),
    /// Task file save/load failure.
    Persist(PersistError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersistError> for ServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Use-case facade owning the task store and its backing file.
#[derive(Debug)]
pub struct TaskService {
    store: TaskStore,
    path: PathBuf,
}

impl TaskService {
    /// Opens the service over `path`, loading persisted tasks once.
    ///
    /// A missing file starts an empty store.
    ///
    /// # Errors
    /// - `ServiceError::Persist` for unreadable or malformed task files.
    pub fn open(path: impl Into<PathBuf>) -> ServiceResult<Self> {
        let path = path.into();
        let tasks = load_tasks(&path)?;
        info!(
            "event=service_open module=service status=ok count={} file={}",
            tasks.len(),
            path.display()
        );
        Ok(Self {
            store: TaskStore::from_tasks(tasks),
            path,
        })
    }

    /// Appends a new incomplete task and flushes.
    pub fn add_task(&mut self, text: &str) -> ServiceResult<Task> {
        let task = self.store.add(text)?.clone();
        self.flush()?;
        Ok(task)
    }

    /// Replaces the text at `index`, preserving completion state, and
    /// flushes.
    pub fn edit_task(&mut self, index: usize, new_text: &str) -> ServiceResult<Task> {
        let task = self.store.edit(index, new_text)?.clone();
        self.flush()?;
        Ok(task)
    }

    /// Removes the task at `index` and flushes.
    pub fn delete_task(&mut self, index: usize) -> ServiceResult<Task> {
        let removed = self.store.delete(index)?;
        self.flush()?;
        Ok(removed)
    }

    /// Flips the completion flag at `index`, flushes, and returns the new
    /// value.
    pub fn toggle_task(&mut self, index: usize) -> ServiceResult<bool> {
        let completed = self.store.toggle_complete(index)?;
        self.flush()?;
        Ok(completed)
    }

    /// Empties the store and flushes the now-empty file.
    ///
    /// Unconditional: confirmation belongs to the presentation layer.
    pub fn clear_all(&mut self) -> ServiceResult<()> {
        self.store.clear_all();
        self.flush()
    }

    /// Full ordered view of the store.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Case-insensitive substring search in insertion order.
    pub fn search(&self, query: &str) -> Search<'_> {
        self.store.search(query)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> ServiceResult<()> {
        save_tasks(&self.path, self.store.tasks())?;
        Ok(())
    }
}
