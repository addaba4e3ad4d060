//! CLI surface: one subcommand per board gesture.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use plangrid_core::{Priority, Status};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plangrid")]
#[command(about = "Kanban-style task board for your terminal")]
#[command(version)]
pub struct Cli {
    /// Path to the board database file
    #[arg(long, default_value = "plangrid.db3")]
    pub db: PathBuf,

    /// Absolute directory for rolling log files; logging stays off without it
    #[arg(long)]
    pub log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new task to the To Do column
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Edit a task's fields; its column is never changed by an edit
    Edit {
        /// Task ID (full UUID or unique prefix)
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description; blank clears it
        #[arg(short, long)]
        description: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
        /// New priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Delete a task
    Delete {
        /// Task ID (full UUID or unique prefix)
        id: String,
    },

    /// Mark a task as completed from any column
    Done {
        /// Task ID (full UUID or unique prefix)
        id: String,
    },

    /// Move a task one column forward (To Do -> In Progress -> Completed)
    Advance {
        /// Task ID (full UUID or unique prefix)
        id: String,
    },

    /// Move a task onto any column, forward or backward
    Move {
        /// Task ID (full UUID or unique prefix)
        id: String,
        /// Target column (todo, in-progress, completed)
        column: Status,
    },

    /// Delete every task on the board
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the three board columns
    Board,

    /// List every task with its full ID
    List,
}
