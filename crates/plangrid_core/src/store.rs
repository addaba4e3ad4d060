//! Authoritative task collection and its durable mirror.
//!
//! # Responsibility
//! - Own the in-memory task list and expose every mutation the board allows.
//! - Mirror the full collection into the durable slot after each mutation.
//!
//! # Invariants
//! - Task ids stay unique within the collection.
//! - Collection order is insertion order; updates replace in place.
//! - A durability failure never loses the in-memory collection.

use crate::model::task::{Status, Task, TaskDraft, TaskId, TaskValidationError};
use crate::slot::{SlotError, StateSlot};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surfaced by store mutations.
///
/// `Persist` is reported after the in-memory mutation has already been
/// applied; callers may show a non-blocking notice, but the session state
/// is intact and remains source of truth.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    Persist(SlotError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "task collection not persisted: {err}"),
            Self::Serialize(err) => write!(f, "task collection not serializable: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persist(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Persist(value)
    }
}

/// Blocking yes/no interaction required before destructive bulk operations.
///
/// Lives in core so the decline path stays testable without a terminal;
/// the CLI supplies the interactive implementation.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Task store owning the canonical collection plus its durable slot.
pub struct TaskStore<S: StateSlot> {
    slot: S,
    tasks: Vec<Task>,
}

impl<S: StateSlot> TaskStore<S> {
    /// Opens the store by loading the durable copy.
    ///
    /// Fails open: a missing slot, an unreadable slot, or an unparseable
    /// payload all initialize an empty collection. Never returns an error.
    pub fn open(slot: S) -> Self {
        let tasks = match slot.read() {
            Ok(Some(payload)) => match parse_collection(&payload) {
                Ok(tasks) => tasks,
                Err(reason) => {
                    warn!(
                        "event=store_load module=store status=fallback reason={reason}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=store_load module=store status=fallback reason=slot_read error={err}");
                Vec::new()
            }
        };
        info!(
            "event=store_load module=store status=ok count={}",
            tasks.len()
        );
        Self { slot, tasks }
    }

    /// Read view of the collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Projects the collection into the three status columns.
    pub fn columns(&self) -> crate::board::Columns<'_> {
        crate::board::partition(&self.tasks)
    }

    /// Validates the draft, appends a fresh task, persists.
    ///
    /// Fresh id generation guarantees the id-uniqueness precondition.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the title is blank; no mutation.
    /// - `StoreError::Persist` when the slot write fails; the task is
    ///   already in the collection.
    pub fn create(&mut self, draft: TaskDraft) -> StoreResult<TaskId> {
        let task = Task::new(draft)?;
        let id = task.id;
        self.tasks.push(task);
        self.persist()?;
        Ok(id)
    }

    /// Replaces the task matching `task.id` wholesale.
    ///
    /// Returns `Ok(false)` without side effects when no task matches.
    pub fn update(&mut self, task: Task) -> StoreResult<bool> {
        task.validate()?;
        let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            return Ok(false);
        };
        *existing = task;
        self.persist()?;
        Ok(true)
    }

    /// Removes the task with the matching id.
    ///
    /// Returns `Ok(false)` without side effects when no task matches.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Replaces only the `status` field of the matching task.
    ///
    /// Returns `Ok(false)` without side effects when no task matches.
    pub fn set_status(&mut self, id: TaskId, status: Status) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.status = status;
        self.persist()?;
        Ok(true)
    }

    /// Empties the collection once the prompt confirms. Irreversible.
    ///
    /// Returns `Ok(false)` without side effects when the prompt declines.
    pub fn clear(&mut self, confirm: &mut dyn ConfirmPrompt) -> StoreResult<bool> {
        if !confirm.confirm("Are you sure you want to clear all tasks?") {
            return Ok(false);
        }
        self.tasks.clear();
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.tasks).map_err(StoreError::Serialize)?;
        if let Err(err) = self.slot.write(&payload) {
            error!(
                "event=store_persist module=store status=error count={} error={err}",
                self.tasks.len()
            );
            return Err(err.into());
        }
        Ok(())
    }
}

fn parse_collection(payload: &str) -> Result<Vec<Task>, String> {
    let tasks: Vec<Task> =
        serde_json::from_str(payload).map_err(|err| format!("bad_payload:{err}"))?;
    for task in &tasks {
        task.validate()
            .map_err(|err| format!("invalid_task:{}:{err}", task.id))?;
    }
    Ok(tasks)
}
