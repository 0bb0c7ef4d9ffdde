//! Task domain model.
//!
//! # Responsibility
//! - Define the single task record shared by store and persistence.
//! - Validate task text on construction and rename.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and non-empty after any successful mutation.
//! - `completed` is a field on the record, so two tasks with identical
//!   text keep independent completion state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation error for task construction and rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty after trimming.
    EmptyText,
    /// Caller-provided id is the nil uuid.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::NilId => write!(f, "task id cannot be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do entry.
///
/// Identity is the stable `id`, not the text: duplicate-text tasks are
/// permitted and complete independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id assigned at creation, used for linking and lookups.
    pub id: TaskId,
    /// User-visible content. Trimmed, never empty.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
}

impl Task {
    /// Creates an incomplete task with a generated stable id.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to nothing.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an incomplete task with a caller-provided stable id.
    ///
    /// Used by load paths where records are rebuilt from disk.
    ///
    /// # Errors
    /// - `TaskValidationError::NilId` for the nil uuid.
    /// - `TaskValidationError::EmptyText` when `text` trims to nothing.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(Self {
            id,
            text: normalize_text(&text.into())?,
            completed: false,
        })
    }

    /// Replaces the text, preserving id and completion flag.
    ///
    /// Leaves the task untouched when validation fails.
    pub fn rename(&mut self, new_text: &str) -> Result<(), TaskValidationError> {
        self.text = normalize_text(new_text)?;
        Ok(())
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

fn normalize_text(text: &str) -> Result<String, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}
