//! Durable slot contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the whole-payload read/write seam the task store persists through.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A slot holds exactly one payload per name; writes replace it wholesale.
//! - Construction must reject connections without a migrated schema.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot name holding the serialized task collection.
pub const TASKS_SLOT: &str = "tasks";

pub type SlotResult<T> = Result<T, SlotError>;

/// Error for slot persistence operations.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
    /// Connection has not been bootstrapped through `open_db`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-payload durable storage seam.
///
/// The contract is intentionally coarse: one read at startup, one full
/// replace after every mutation. There is no partial write.
pub trait StateSlot {
    /// Reads the current payload, `None` when the slot has never been written.
    fn read(&self) -> SlotResult<Option<String>>;

    /// Replaces the slot payload wholesale.
    fn write(&self, payload: &str) -> SlotResult<()>;
}

/// SQLite-backed slot storing one payload row under a fixed name.
pub struct SqliteStateSlot<'conn> {
    conn: &'conn Connection,
    name: &'static str,
}

impl<'conn> SqliteStateSlot<'conn> {
    /// Creates the task-collection slot over a migrated connection.
    ///
    /// # Errors
    /// - `SlotError::UninitializedConnection` when the schema version does
    ///   not match this binary.
    /// - `SlotError::MissingRequiredTable` when the `slots` table is absent.
    pub fn try_new(conn: &'conn Connection) -> SlotResult<Self> {
        Self::with_name(conn, TASKS_SLOT)
    }

    /// Creates a slot with an explicit name, same guards as `try_new`.
    pub fn with_name(conn: &'conn Connection, name: &'static str) -> SlotResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(SlotError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'slots'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(SlotError::MissingRequiredTable("slots"));
        }

        Ok(Self { conn, name })
    }
}

impl StateSlot for SqliteStateSlot<'_> {
    fn read(&self) -> SlotResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM slots WHERE name = ?1;",
                [self.name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write(&self, payload: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO slots (name, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.name, payload],
        )?;
        debug!(
            "event=slot_write module=slot status=ok name={} bytes={}",
            self.name,
            payload.len()
        );
        Ok(())
    }
}
