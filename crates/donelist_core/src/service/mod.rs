//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations with after-write persistence flushes.
//! - Keep presentation callers decoupled from storage details.

pub mod task_service;
