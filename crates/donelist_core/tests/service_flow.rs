use donelist_core::{PersistError, ServiceError, StoreError, TaskService};
use std::path::PathBuf;
use tempfile::TempDir;

fn tasks_file(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.txt")
}

#[test]
fn open_on_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let service = TaskService::open(tasks_file(&dir)).unwrap();

    assert!(service.is_empty());
    assert_eq!(service.tasks().len(), 0);
}

#[test]
fn every_mutation_flushes_the_full_store() {
    let dir = TempDir::new().unwrap();
    let path = tasks_file(&dir);
    let mut service = TaskService::open(&path).unwrap();

    service.add_task("buy milk").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0|buy milk\n");

    service.add_task("walk dog").unwrap();
    let completed = service.toggle_task(0).unwrap();
    assert!(completed);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "1|buy milk\n0|walk dog\n"
    );
}

#[test]
fn reopened_service_sees_persisted_state() {
    let dir = TempDir::new().unwrap();
    let path = tasks_file(&dir);

    {
        let mut service = TaskService::open(&path).unwrap();
        service.add_task("buy milk").unwrap();
        service.add_task("walk dog").unwrap();
        service.toggle_task(0).unwrap();
    }

    let reopened = TaskService::open(&path).unwrap();
    let tasks = reopened.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "buy milk");
    assert!(tasks[0].completed);
    assert_eq!(tasks[1].text, "walk dog");
    assert!(!tasks[1].completed);
}

#[test]
fn store_error_aborts_before_any_write() {
    let dir = TempDir::new().unwrap();
    let path = tasks_file(&dir);
    let mut service = TaskService::open(&path).unwrap();
    service.add_task("survivor").unwrap();

    let err = service.add_task("   ").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Store(StoreError::Validation(_))
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0|survivor\n");

    let err = service.delete_task(9).unwrap_err();
    assert!(matches!(err, ServiceError::Store(StoreError::NotFound(9))));
    assert_eq!(service.len(), 1);
}

#[test]
fn edit_and_delete_flow_through_the_service() {
    let dir = TempDir::new().unwrap();
    let path = tasks_file(&dir);
    let mut service = TaskService::open(&path).unwrap();

    service.add_task("first").unwrap();
    service.add_task("second").unwrap();
    service.toggle_task(1).unwrap();

    let edited = service.edit_task(1, "second, revised").unwrap();
    assert!(edited.completed);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "0|first\n1|second, revised\n"
    );

    let removed = service.delete_task(0).unwrap();
    assert_eq!(removed.text, "first");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "1|second, revised\n"
    );
}

#[test]
fn clear_all_truncates_the_file() {
    let dir = TempDir::new().unwrap();
    let path = tasks_file(&dir);
    let mut service = TaskService::open(&path).unwrap();

    service.add_task("a").unwrap();
    service.add_task("b").unwrap();
    service.clear_all().unwrap();

    assert!(service.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn search_through_the_service_matches_store_semantics() {
    let dir = TempDir::new().unwrap();
    let mut service = TaskService::open(tasks_file(&dir)).unwrap();

    service.add_task("Buy Milk").unwrap();
    service.add_task("walk dog").unwrap();

    let hits: Vec<_> = service.search("MILK").map(|task| task.text.as_str()).collect();
    assert_eq!(hits, vec!["Buy Milk"]);

    let all: Vec<_> = service.search("").map(|task| task.text.as_str()).collect();
    assert_eq!(all, vec!["Buy Milk", "walk dog"]);
}

#[test]
fn open_surfaces_malformed_task_files() {
    let dir = TempDir::new().unwrap();
    let path = tasks_file(&dir);
    std::fs::write(&path, "not a record\n").unwrap();

    let err = TaskService::open(&path).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Persist(PersistError::InvalidRecord { line: 1, .. })
    ));
}
