//! Flat-file persistence for the task store.
//!
//! # Responsibility
//! - Serialize the full task sequence to a line-oriented text file.
//! - Rebuild the sequence from disk at startup.
//!
//! # Invariants
//! - Records are written as `<flag>|<text>`, one per line; file order is
//!   display order.
//! - A missing file loads as an empty store; every other failure surfaces.
//! - Read paths reject malformed records instead of masking them.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;

pub use file::{load_tasks, save_tasks};

pub type PersistResult<T> = Result<T, PersistError>;

/// Error for task file save/load operations.
#[derive(Debug)]
pub enum PersistError {
    /// Filesystem failure other than a missing file on load.
    Io(std::io::Error),
    /// A persisted line violates the `<flag>|<text>` record format.
    InvalidRecord { line: usize, message: String },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "task file I/O failed: {err}"),
            Self::InvalidRecord { line, message } => {
                write!(f, "invalid task record at line {line}: {message}")
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidRecord { .. } => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
