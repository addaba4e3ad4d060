//! PlanGrid CLI entry point.
//!
//! Translates user gestures into store operations and re-renders the
//! board from the updated collection after every mutation.

mod commands;
mod prompt;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use commands::{Cli, Command};
use plangrid_core::db::open_db;
use plangrid_core::model::task::{normalize_description, normalize_title};
use plangrid_core::{
    default_log_level, init_logging, ConfirmPrompt, SqliteStateSlot, StateSlot, Status, StoreError,
    Task, TaskDraft, TaskId, TaskStore,
};
use prompt::{AutoConfirm, StdinConfirm};
use uuid::Uuid;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        if let Err(err) = init_logging(&level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    log::info!(
        "event=cli_start module=cli status=ok version={}",
        env!("CARGO_PKG_VERSION")
    );

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open board database at {}", cli.db.display()))?;
    let slot = SqliteStateSlot::try_new(&conn).context("board database is not initialized")?;
    let mut store = TaskStore::open(slot);

    dispatch(cli.command, &mut store)
}

fn dispatch<S: StateSlot>(command: Command, store: &mut TaskStore<S>) -> Result<()> {
    match command {
        Command::Add {
            title,
            description,
            due,
            priority,
        } => {
            let draft = TaskDraft {
                title,
                description,
                priority: priority.unwrap_or_default(),
                due_date: due,
            };
            match store.create(draft) {
                Ok(id) => println!("Added task {}.", render::short_id(id)),
                Err(StoreError::Validation(err)) => {
                    eprintln!("{err}");
                    return Ok(());
                }
                Err(err) => eprintln!("warning: {err}"),
            }
            render::print_board(store.tasks());
        }

        Command::Edit {
            id,
            title,
            description,
            due,
            clear_due,
            priority,
        } => {
            let Some(task_id) = resolve_id(store.tasks(), &id)? else {
                println!("No task matches `{id}`.");
                return Ok(());
            };
            let Some(task) = store.get(task_id) else {
                println!("No task matches `{id}`.");
                return Ok(());
            };

            let mut edited = task.clone();
            if let Some(title) = title {
                match normalize_title(&title) {
                    Ok(title) => edited.title = title,
                    Err(err) => {
                        eprintln!("{err}");
                        return Ok(());
                    }
                }
            }
            if let Some(description) = description {
                edited.description = normalize_description(Some(description));
            }
            if clear_due {
                edited.due_date = None;
            }
            if let Some(due) = due {
                edited.due_date = Some(due);
            }
            if let Some(priority) = priority {
                edited.priority = priority;
            }

            match store.update(edited) {
                Ok(true) => println!("Updated task {}.", render::short_id(task_id)),
                Ok(false) => println!("No task matches `{id}`."),
                Err(StoreError::Validation(err)) => {
                    eprintln!("{err}");
                    return Ok(());
                }
                Err(err) => eprintln!("warning: {err}"),
            }
            render::print_board(store.tasks());
        }

        Command::Delete { id } => {
            let Some(task_id) = resolve_id(store.tasks(), &id)? else {
                println!("No task matches `{id}`.");
                return Ok(());
            };
            match store.delete(task_id) {
                Ok(true) => println!("Deleted task {}.", render::short_id(task_id)),
                Ok(false) => println!("No task matches `{id}`."),
                Err(err) => eprintln!("warning: {err}"),
            }
            render::print_board(store.tasks());
        }

        Command::Done { id } => {
            move_task(store, &id, Status::Completed)?;
        }

        Command::Advance { id } => {
            let Some(task_id) = resolve_id(store.tasks(), &id)? else {
                println!("No task matches `{id}`.");
                return Ok(());
            };
            let Some(task) = store.get(task_id) else {
                println!("No task matches `{id}`.");
                return Ok(());
            };
            // Directional buttons are forward-only; backward moves go
            // through `move` instead.
            let Some(next) = task.status.forward() else {
                println!(
                    "Task {} is already completed; use `move` to send it back.",
                    render::short_id(task_id)
                );
                return Ok(());
            };
            move_task(store, &task_id.to_string(), next)?;
        }

        Command::Move { id, column } => {
            move_task(store, &id, column)?;
        }

        Command::Clear { yes } => {
            let mut prompt: Box<dyn ConfirmPrompt> = if yes {
                Box::new(AutoConfirm)
            } else {
                Box::new(StdinConfirm)
            };
            match store.clear(prompt.as_mut()) {
                Ok(true) => println!("Cleared all tasks."),
                Ok(false) => println!("Kept the board as it is."),
                Err(err) => eprintln!("warning: {err}"),
            }
            render::print_board(store.tasks());
        }

        Command::Board => render::print_board(store.tasks()),

        Command::List => render::print_list(store.tasks()),
    }

    Ok(())
}

fn move_task<S: StateSlot>(store: &mut TaskStore<S>, id: &str, status: Status) -> Result<()> {
    let Some(task_id) = resolve_id(store.tasks(), id)? else {
        println!("No task matches `{id}`.");
        return Ok(());
    };
    match store.set_status(task_id, status) {
        Ok(true) => println!("Moved task {} to {status}.", render::short_id(task_id)),
        Ok(false) => println!("No task matches `{id}`."),
        Err(err) => eprintln!("warning: {err}"),
    }
    render::print_board(store.tasks());
    Ok(())
}

/// Resolves a full UUID or a unique id prefix against the collection.
///
/// Returns `Ok(None)` when nothing matches; ambiguous prefixes are an
/// error so a gesture never lands on the wrong task.
fn resolve_id(tasks: &[Task], needle: &str) -> Result<Option<TaskId>> {
    let needle = needle.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Ok(None);
    }

    if let Ok(id) = Uuid::parse_str(&needle) {
        return Ok(tasks.iter().find(|task| task.id == id).map(|task| task.id));
    }

    let matches: Vec<TaskId> = tasks
        .iter()
        .filter(|task| task.id.to_string().starts_with(&needle))
        .map(|task| task.id)
        .collect();
    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        _ => bail!(
            "id prefix `{needle}` matches {} tasks; use more characters",
            matches.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_id;
    use plangrid_core::{Task, TaskDraft};
    use uuid::Uuid;

    fn task_with_id(id: &str) -> Task {
        Task::with_id(Uuid::parse_str(id).unwrap(), TaskDraft::new("t")).unwrap()
    }

    #[test]
    fn resolve_id_accepts_full_uuid_and_unique_prefix() {
        let tasks = vec![
            task_with_id("aaaaaaaa-0000-4000-8000-000000000000"),
            task_with_id("abbbbbbb-0000-4000-8000-000000000000"),
        ];

        let full = resolve_id(&tasks, "aaaaaaaa-0000-4000-8000-000000000000").unwrap();
        assert_eq!(full, Some(tasks[0].id));

        let prefix = resolve_id(&tasks, "ab").unwrap();
        assert_eq!(prefix, Some(tasks[1].id));
    }

    #[test]
    fn resolve_id_returns_none_for_unknown_ids() {
        let tasks = vec![task_with_id("aaaaaaaa-0000-4000-8000-000000000000")];

        assert_eq!(resolve_id(&tasks, "ff").unwrap(), None);
        assert_eq!(
            resolve_id(&tasks, "bbbbbbbb-0000-4000-8000-000000000000").unwrap(),
            None
        );
        assert_eq!(resolve_id(&tasks, "  ").unwrap(), None);
    }

    #[test]
    fn resolve_id_rejects_ambiguous_prefixes() {
        let tasks = vec![
            task_with_id("aaaaaaaa-0000-4000-8000-000000000000"),
            task_with_id("aaaaaaab-0000-4000-8000-000000000000"),
        ];

        assert!(resolve_id(&tasks, "aaaa").is_err());
    }
}
