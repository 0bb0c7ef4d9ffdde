//! Line-oriented task file reader/writer.
//!
//! # Responsibility
//! - Own the on-disk record syntax (`<flag>|<text>`).
//! - Keep filesystem details out of store/service code.
//!
//! # Invariants
//! - `save_tasks` rewrites the whole file on every call.
//! - Only the first `|` on a line delimits; later `|` belong to the text.
//! - Flags are exactly `0` or `1`.

use super::{PersistError, PersistResult};
use crate::model::task::Task;
use log::{error, info};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

const COMPLETED_FLAG: &str = "1";
const OPEN_FLAG: &str = "0";

/// Writes the full task sequence to `path`, one record per line.
///
/// Overwrites any existing file. Callers flush after every mutation, so
/// the file always mirrors the in-memory sequence. There is no temp-file
/// rename step: an interrupted write can truncate the file.
///
/// # Errors
/// - `PersistError::Io` when the target is not writable.
pub fn save_tasks(path: impl AsRef<Path>, tasks: &[Task]) -> PersistResult<()> {
    let started_at = Instant::now();
    let mut contents = String::new();
    for task in tasks {
        contents.push_str(if task.completed {
            COMPLETED_FLAG
        } else {
            OPEN_FLAG
        });
        contents.push('|');
        contents.push_str(&task.text);
        contents.push('\n');
    }

    match std::fs::write(path.as_ref(), contents) {
        Ok(()) => {
            info!(
                "event=tasks_save module=persist status=ok count={} duration_ms={}",
                tasks.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=tasks_save module=persist status=error error_code=write_failed error={err}"
            );
            Err(err.into())
        }
    }
}

/// Reads the task sequence back from `path` in file order.
///
/// Blank lines are skipped. A missing file is an empty store, not an
/// error.
///
/// # Errors
/// - `PersistError::Io` for read failures other than a missing file.
/// - `PersistError::InvalidRecord` for lines violating the record format,
///   carrying the 1-based line number.
pub fn load_tasks(path: impl AsRef<Path>) -> PersistResult<Vec<Task>> {
    let started_at = Instant::now();
    let contents = match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("event=tasks_load module=persist status=ok count=0 source=missing_file");
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=tasks_load module=persist status=error error_code=read_failed error={err}"
            );
            return Err(err.into());
        }
    };

    let mut tasks = Vec::new();
    for (line_index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        tasks.push(parse_record(line_index + 1, line)?);
    }

    info!(
        "event=tasks_load module=persist status=ok count={} duration_ms={}",
        tasks.len(),
        started_at.elapsed().as_millis()
    );
    Ok(tasks)
}

fn parse_record(line_no: usize, line: &str) -> PersistResult<Task> {
    let Some((flag, text)) = line.split_once('|') else {
        return Err(PersistError::InvalidRecord {
            line: line_no,
            message: format!("missing `|` delimiter in `{line}`"),
        });
    };

    let completed = match flag {
        COMPLETED_FLAG => true,
        OPEN_FLAG => false,
        other => {
            return Err(PersistError::InvalidRecord {
                line: line_no,
                message: format!("invalid completion flag `{other}`, expected 0 or 1"),
            });
        }
    };

    // Ids are not part of the file format; a fresh one is assigned per load
    // and stays stable for the process lifetime.
    let mut task = Task::new(text).map_err(|err| PersistError::InvalidRecord {
        line: line_no,
        message: err.to_string(),
    })?;
    task.completed = completed;
    Ok(task)
}
