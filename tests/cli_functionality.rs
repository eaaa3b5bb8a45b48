//! Integration tests for CLI functionality
//!
//! These tests verify that the interactive session, task list loading and
//! configuration work together. Unit tests for individual functions are
//! located in the respective module files.

use std::fs;
use task_scheduler::cli::{FileError, SchedulerConfig, Session, TaskLoader};
use tempfile::TempDir;

fn run_session(input: &str, config: SchedulerConfig) -> (Vec<String>, String) {
    let mut session = Session::new(input.as_bytes(), Vec::new(), config);
    session.run().unwrap();

    let descriptions = session
        .scheduler()
        .list_tasks()
        .iter()
        .map(|task| task.description().to_string())
        .collect();
    let output = String::from_utf8(session.into_output()).unwrap();
    (descriptions, output)
}

#[test]
fn test_interactive_add_show_execute() {
    let input = "add\nFinish project\n3\nnone\nproject\n\
                 add\nExam revision\n2\n2023,7,1\nexam\n\
                 show\nexecute\nsize\nquit\n";

    let (remaining, output) = run_session(input, SchedulerConfig::default());

    assert_eq!(remaining, vec!["Exam revision"]);
    assert!(output.contains("Successfully added"));
    assert!(output.contains(
        "Current tasks:\n\
         Description: Finish project, Priority: 3, Deadline: None\n\
         Description: Exam revision, Priority: 2, Deadline: 2023-07-01 00:00:00"
    ));
    assert!(output.contains("Executing task: Description: Finish project, Priority: 3"));
    assert!(output.contains("Please enter a command: 1\n"));
}

#[test]
fn test_interactive_reorder_by_name() {
    let input = "add\nExam revision\n2\n2023,7,1\nexam\n\
                 add\nBuy groceries\n1\nnone\ngroceries\n\
                 reorder\ngroceries\n4\n2023,5,10\n\
                 quit\n";

    let (order, output) = run_session(input, SchedulerConfig::default());

    assert_eq!(order, vec!["Buy groceries", "Exam revision"]);
    assert!(output.contains("Successfully reordered"));
}

#[test]
fn test_interactive_invalid_reorder_leaves_queue_untouched() {
    let input = "add\nExam revision\n2\n2023,7,1\nexam\n\
                 add\nBuy groceries\n1\nnone\ngroceries\n\
                 reorder\ngroceries\nurgent\n2023,5,10\n\
                 reorder\ngroceries\n4\n2023,2,30\n\
                 reorder\nnobody\n\
                 quit\n";

    let (order, output) = run_session(input, SchedulerConfig::default());

    assert_eq!(order, vec!["Exam revision", "Buy groceries"]);
    assert!(output.contains("Invalid priority: 'urgent' is not an integer, nothing was changed"));
    assert!(output.contains("Invalid deadline"));
    assert!(output.contains("Sorry, there is no task named 'nobody'"));
}

#[test]
fn test_interactive_update_description_after_execute() {
    let input = "add\nExam revision\n2\n2023,7,1\nexam\n\
                 update description\nexam\nDo homework\n\
                 show\n\
                 execute\n\
                 update description\nexam\nToo late\n\
                 quit\n";

    let (remaining, output) = run_session(input, SchedulerConfig::default());

    assert!(remaining.is_empty());
    assert!(output.contains("Successfully updated"));
    assert!(output.contains("Description: Do homework, Priority: 2"));
    assert!(output.contains("Task 'exam' is no longer in the queue"));
}

#[test]
fn test_interactive_clear_and_unknown_command() {
    let input = "add\na\n1\nnone\na\nlaunch\nclear\nshow\nexecute\n";

    let (remaining, output) = run_session(input, SchedulerConfig::default());

    assert!(remaining.is_empty());
    assert!(output.contains("Unknown command 'launch', please try again"));
    assert!(output.contains("All tasks cleared"));
    assert!(output.contains("No tasks\n"));
    assert!(output.contains("No tasks to execute"));
}

#[test]
fn test_interactive_show_ids() {
    let mut config = SchedulerConfig::default();
    config.display.show_ids = true;
    let input = "add\nTagged\n1\nnone\nt\nshow\n";

    let mut session = Session::new(input.as_bytes(), Vec::new(), config);
    session.run().unwrap();
    let id = session.scheduler().peek_task().unwrap().id();
    let output = String::from_utf8(session.into_output()).unwrap();

    assert!(output.contains(&format!("[{id}] Description: Tagged")));
}

#[test]
fn test_task_list_loading_toml() {
    let temp_dir = TempDir::new().unwrap();
    let task_list = temp_dir.path().join("tasks.toml");
    fs::write(
        &task_list,
        r#"
[[tasks]]
description = "Buy groceries"
priority = 1

[[tasks]]
description = "Exam revision"
priority = 2
deadline = "2023,7,1"

[[tasks]]
description = "Finish project"
priority = 2
deadline = "2023-05-01"
"#,
    )
    .unwrap();

    let mut scheduler = task_scheduler::Scheduler::new();
    for task in TaskLoader::load_tasks(&task_list).unwrap() {
        scheduler.add_task(task);
    }

    let order: Vec<_> = scheduler
        .drain()
        .into_iter()
        .map(|task| task.description().to_string())
        .collect();
    assert_eq!(order, vec!["Finish project", "Exam revision", "Buy groceries"]);
}

#[test]
fn test_task_list_loading_json() {
    let temp_dir = TempDir::new().unwrap();
    let task_list = temp_dir.path().join("tasks.json");
    fs::write(
        &task_list,
        r#"[{"description": "one", "priority": 1}, {"description": "two", "priority": 2, "deadline": "none"}]"#,
    )
    .unwrap();

    let tasks = TaskLoader::load_tasks(&task_list).unwrap();

    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|task| task.deadline().is_none()));
}

#[test]
fn test_task_list_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.toml");
    assert!(matches!(
        TaskLoader::load_tasks(&missing),
        Err(FileError::NotFound { .. })
    ));

    let malformed = temp_dir.path().join("malformed.toml");
    fs::write(&malformed, "[[tasks]]\ndescription = 3\n").unwrap();
    assert!(matches!(
        TaskLoader::load_tasks(&malformed),
        Err(FileError::ParseError { .. })
    ));

    let bad_date = temp_dir.path().join("bad_date.toml");
    fs::write(
        &bad_date,
        "[[tasks]]\ndescription = \"ok\"\npriority = 1\n\n\
         [[tasks]]\ndescription = \"bad\"\npriority = 1\ndeadline = \"2023,2,30\"\n",
    )
    .unwrap();
    match TaskLoader::load_tasks(&bad_date) {
        Err(FileError::InvalidTask { index, .. }) => assert_eq!(index, 2),
        other => panic!("Expected InvalidTask, got {other:?}"),
    }
}

#[test]
fn test_config_file_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tsched.toml");
    fs::write(
        &config_path,
        "[logging]\nfilter = \"task_scheduler=debug\"\n\n[input]\ndefault_priority = 2\n",
    )
    .unwrap();

    let config = SchedulerConfig::from_toml_file(&config_path).unwrap();

    assert_eq!(config.logging.filter, "task_scheduler=debug");
    assert_eq!(config.input.default_priority, Some(2));
    assert!(!config.display.show_ids);
}
