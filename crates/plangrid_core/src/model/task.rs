//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by the store and the board views.
//! - Normalize and validate draft input before a task enters the collection.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is never empty after trimming.
//! - `created_at` is set once at creation and never changes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Column a task lives in. Doubles as the task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Created but not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Finished.
    Completed,
}

/// Task urgency used for board ordering hints and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Status {
    /// All statuses in board column order.
    pub fn all() -> [Status; 3] {
        [Status::Todo, Status::InProgress, Status::Completed]
    }

    /// Wire/CLI name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    /// Human column heading.
    pub fn heading(self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    /// Successor for the forward-only directional move.
    ///
    /// Directional controls only move tasks forward; a completed task has
    /// no successor. Backward moves exist only through the column-targeted
    /// move gesture.
    pub fn forward(self) -> Option<Status> {
        match self {
            Status::Todo => Some(Status::InProgress),
            Status::InProgress => Some(Status::Completed),
            Status::Completed => None,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Priority {
    /// Wire/CLI name for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized status names in CLI/user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    pub value: String,
}

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized status `{}`; expected todo|in-progress|completed",
            self.value
        )
    }
}

impl Error for ParseStatusError {}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "in-progress" | "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(ParseStatusError {
                value: value.to_string(),
            }),
        }
    }
}

/// Error for unrecognized priority names in CLI/user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError {
    pub value: String,
}

impl Display for ParsePriorityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized priority `{}`; expected low|medium|high",
            self.value
        )
    }
}

impl Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParsePriorityError {
                value: value.to_string(),
            }),
        }
    }
}

/// Validation failure for task field invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
    /// The nil UUID is reserved and never a valid task id.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// User-editable fields of a task, before identity and lifecycle are
/// attached. The creation form and the edit form both produce one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Canonical task record.
///
/// Field names on the wire stay camelCase so payloads written by earlier
/// versions of the board remain loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID used for lookup and gesture targeting.
    pub id: TaskId,
    /// Non-empty display title.
    pub title: String,
    /// Optional body text. Empty input normalizes to `None`.
    pub description: Option<String>,
    /// Column the task currently lives in.
    pub status: Status,
    pub priority: Priority,
    /// Optional due date, date-only.
    pub due_date: Option<NaiveDate>,
    /// Set once at creation; immutable afterwards.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from draft input with a generated stable ID.
    ///
    /// # Invariants
    /// - `status` starts as `Todo`.
    /// - `created_at` is stamped now and never changes.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when the trimmed title is empty.
    pub fn new(draft: TaskDraft) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    ///
    /// # Errors
    /// - `TaskValidationError::NilId` for the nil UUID.
    /// - `TaskValidationError::EmptyTitle` when the trimmed title is empty.
    pub fn with_id(id: TaskId, draft: TaskDraft) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let task = Self {
            id,
            title: normalize_title(&draft.title)?,
            description: normalize_description(draft.description),
            status: Status::Todo,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at: Utc::now(),
        };
        Ok(task)
    }

    /// Re-checks field invariants, used on data loaded from storage.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims the title and rejects empty results.
pub fn normalize_title(title: &str) -> Result<String, TaskValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Trims the description and collapses empty input to `None`.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    let trimmed = description?.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
