use donelist_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("buy milk").unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.text, "buy milk");
    assert!(!task.completed);
}

#[test]
fn task_new_trims_text() {
    let task = Task::new("  walk dog \t").unwrap();
    assert_eq!(task.text, "walk dog");
}

#[test]
fn task_new_rejects_blank_text() {
    assert_eq!(Task::new("").unwrap_err(), TaskValidationError::EmptyText);
    assert_eq!(Task::new("   ").unwrap_err(), TaskValidationError::EmptyText);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "valid text").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn toggle_flips_and_restores_flag() {
    let mut task = Task::new("water plants").unwrap();

    assert!(task.toggle());
    assert!(task.completed);

    assert!(!task.toggle());
    assert!(!task.completed);
}

#[test]
fn rename_preserves_id_and_completion_flag() {
    let mut task = Task::new("draft").unwrap();
    let id = task.id;
    task.toggle();

    task.rename("  final text  ").unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.text, "final text");
    assert!(task.completed);
}

#[test]
fn rename_rejects_blank_text_and_leaves_task_untouched() {
    let mut task = Task::new("keep me").unwrap();

    let err = task.rename(" \n ").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyText);
    assert_eq!(task.text, "keep me");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "ship release notes").unwrap();
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["text"], "ship release notes");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
