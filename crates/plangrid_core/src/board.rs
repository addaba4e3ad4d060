//! Status-partitioned views over the task collection.
//!
//! # Responsibility
//! - Project the collection into the three board columns.
//!
//! # Invariants
//! - The partition is exhaustive and disjoint: every task appears in
//!   exactly one column.
//! - Collection order is preserved within each column.

use crate::model::task::{Status, Task};

/// Borrowed projection of the collection into the three columns.
///
/// Recomputed on every render; holds no state of its own.
#[derive(Debug, Default)]
pub struct Columns<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> Columns<'a> {
    /// Tasks in the given column.
    pub fn column(&self, status: Status) -> &[&'a Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Completed => &self.completed,
        }
    }

    /// Total task count across all columns.
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions tasks by status, preserving slice order within each column.
pub fn partition(tasks: &[Task]) -> Columns<'_> {
    let mut columns = Columns::default();
    for task in tasks {
        match task.status {
            Status::Todo => columns.todo.push(task),
            Status::InProgress => columns.in_progress.push(task),
            Status::Completed => columns.completed.push(task),
        }
    }
    columns
}
