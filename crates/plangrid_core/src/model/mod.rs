//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the canonical task record and its closed status/priority enums.
//! - Normalize and validate user-provided task fields.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Invalid status/priority values are unrepresentable in memory.

pub mod task;
