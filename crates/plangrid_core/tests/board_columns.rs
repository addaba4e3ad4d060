use plangrid_core::{partition, Status, Task, TaskDraft};
use std::collections::HashSet;
use uuid::Uuid;

fn task_with_status(id_suffix: u32, title: &str, status: Status) -> Task {
    let id = Uuid::parse_str(&format!("00000000-0000-4000-8000-{id_suffix:012}")).unwrap();
    let mut task = Task::with_id(id, TaskDraft::new(title)).unwrap();
    task.status = status;
    task
}

#[test]
fn partition_is_exhaustive_and_disjoint() {
    let tasks = vec![
        task_with_status(1, "a", Status::Todo),
        task_with_status(2, "b", Status::InProgress),
        task_with_status(3, "c", Status::Completed),
        task_with_status(4, "d", Status::Todo),
        task_with_status(5, "e", Status::Completed),
    ];

    let columns = partition(&tasks);

    assert_eq!(columns.len(), tasks.len());

    let mut seen = HashSet::new();
    for status in Status::all() {
        for task in columns.column(status) {
            assert_eq!(task.status, status);
            assert!(seen.insert(task.id), "task {} appears twice", task.id);
        }
    }
    assert_eq!(seen.len(), tasks.len());
}

#[test]
fn partition_preserves_collection_order_within_columns() {
    let tasks = vec![
        task_with_status(1, "first", Status::Todo),
        task_with_status(2, "other", Status::InProgress),
        task_with_status(3, "second", Status::Todo),
        task_with_status(4, "third", Status::Todo),
    ];

    let columns = partition(&tasks);
    let todo_titles: Vec<&str> = columns.todo.iter().map(|t| t.title.as_str()).collect();

    assert_eq!(todo_titles, ["first", "second", "third"]);
}

#[test]
fn partition_of_empty_collection_is_empty() {
    let columns = partition(&[]);

    assert!(columns.is_empty());
    assert!(columns.todo.is_empty());
    assert!(columns.in_progress.is_empty());
    assert!(columns.completed.is_empty());
}
