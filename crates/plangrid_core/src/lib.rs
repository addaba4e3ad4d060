//! Core domain logic for PlanGrid.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod db;
pub mod logging;
pub mod model;
pub mod slot;
pub mod store;

pub use board::{partition, Columns};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    ParsePriorityError, ParseStatusError, Priority, Status, Task, TaskDraft, TaskId,
    TaskValidationError,
};
pub use slot::{SlotError, SlotResult, SqliteStateSlot, StateSlot, TASKS_SLOT};
pub use store::{ConfirmPrompt, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
