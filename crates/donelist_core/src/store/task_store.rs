//! Ordered, index-addressed task store.
//!
//! # Responsibility
//! - Hold the task sequence in insertion order.
//! - Provide add/edit/delete/toggle/clear mutations and substring search.
//!
//! # Invariants
//! - Insertion order is display order; delete shifts later indices down.
//! - Edits preserve id, position and completion flag.
//! - No mutation partially applies: validation runs before state changes.

use crate::model::task::{Task, TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for task store mutation and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(usize),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(index) => write!(f, "no task at index {index}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered collection of tasks, addressed by display index.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously loaded records, keeping file order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends a new incomplete task and returns it.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `text` trims to nothing.
    pub fn add(&mut self, text: &str) -> StoreResult<&Task> {
        self.tasks.push(Task::new(text)?);
        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    /// Removes and returns the task at `index`.
    ///
    /// Later tasks shift down by one position.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `index` is out of bounds.
    pub fn delete(&mut self, index: usize) -> StoreResult<Task> {
        if index >= self.tasks.len() {
            return Err(StoreError::NotFound(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Replaces the text at `index`, preserving id, position and
    /// completion flag.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `index` is out of bounds.
    /// - `StoreError::Validation` when `new_text` trims to nothing.
    pub fn edit(&mut self, index: usize, new_text: &str) -> StoreResult<&Task> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::NotFound(index))?;
        task.rename(new_text)?;
        Ok(&self.tasks[index])
    }

    /// Flips the completion flag at `index` and returns the new value.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `index` is out of bounds.
    pub fn toggle_complete(&mut self, index: usize) -> StoreResult<bool> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::NotFound(index))?;
        Ok(task.toggle())
    }

    /// Empties the store unconditionally.
    ///
    /// Any confirmation step belongs to the presentation layer.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
    }

    /// Returns the task at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns the display index of the task with the given stable id.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Full ordered view of the sequence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Lazily yields tasks whose text contains `query`, case-insensitively,
    /// in insertion order.
    ///
    /// The query is trimmed before matching. An empty query matches every
    /// task. The iterator is finite and restartable: call `search` again
    /// (or clone the iterator) to rescan from the start.
    pub fn search(&self, query: &str) -> Search<'_> {
        Search {
            tasks: self.tasks.iter(),
            needle: query.trim().to_lowercase(),
        }
    }
}

/// Lazy search iterator returned by [`TaskStore::search`].
#[derive(Debug, Clone)]
pub struct Search<'a> {
    tasks: std::slice::Iter<'a, Task>,
    needle: String,
}

impl<'a> Iterator for Search<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.tasks
            .find(|task| needle.is_empty() || task.text.to_lowercase().contains(needle))
    }
}
