//! Text rendering for the board columns.
//!
//! Re-renders everything from the collection after each gesture; the
//! partition is recomputed per render and caches nothing.

use plangrid_core::{partition, Status, Task, TaskId};

/// Prints the three status columns.
pub fn print_board(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("Your task board is empty. Add a task to get started.");
        return;
    }

    let columns = partition(tasks);
    for status in Status::all() {
        let column = columns.column(status);
        println!("{} ({})", status.heading(), column.len());
        if column.is_empty() {
            println!("  (none)");
        }
        for task in column {
            println!("{}", card_line(task));
        }
        println!();
    }
}

/// Prints every task with its full id, for gesture targeting.
pub fn print_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for task in tasks {
        println!(
            "{}  {:<11}  [{}] {}",
            task.id,
            task.status.as_str(),
            task.priority,
            task.title
        );
        if let Some(description) = &task.description {
            println!("{:38}{}", "", description);
        }
    }
}

fn card_line(task: &Task) -> String {
    let mut line = format!("  {}  [{}] {}", short_id(task.id), task.priority, task.title);
    if let Some(due) = task.due_date {
        line.push_str(&format!(" (due {due})"));
    }
    line
}

/// First 8 hex digits of the id, enough to target tasks on a small board.
pub fn short_id(id: TaskId) -> String {
    id.to_string().chars().take(8).collect()
}
