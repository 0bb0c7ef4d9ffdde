//! In-memory task storage.
//!
//! # Responsibility
//! - Own the ordered task sequence for the process lifetime.
//! - Expose mutation and query operations to service/presentation layers.
//!
//! # Invariants
//! - Store writes validate through the task model before touching state.
//! - Store APIs return semantic errors (`NotFound`) distinct from
//!   validation failures.

pub mod task_store;
