mod common;

use common::{create_test_store, open_store};
use taskpad_core::{
    storage::{Storage, TASKS_KEY, THEME_KEY},
    StoreBuilder, StoreError, Theme, DEFAULT_TASK_TITLE,
};
use tempfile::TempDir;

#[test]
fn test_fresh_storage_seeds_default_task() {
    let (_temp_dir, store) = create_test_store();

    let state = store.state();
    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].title, DEFAULT_TASK_TITLE);
    assert!(state.tasks[0].subtasks.is_empty());
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn test_builder_creates_missing_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("deeper").join("store.db");

    let store = StoreBuilder::new()
        .with_storage_path(Some(&path))
        .build()
        .expect("Failed to create store");

    assert!(path.exists());
    assert_eq!(store.state().tasks.len(), 1);
}

#[test]
fn test_changes_survive_restart() {
    let (temp_dir, mut store) = create_test_store();

    store.add_task("Buy milk").expect("add");
    store.set_pending_subtask_text(1, "Eggs").expect("buffer");
    store.add_subtask(1).expect("subtask");
    store.toggle_task_completion(1).expect("complete");
    store.toggle_theme().expect("theme");
    drop(store);

    let store = open_store(&temp_dir);
    let state = store.state();
    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.tasks[1].title, "Buy milk");
    assert!(state.tasks[1].completed);
    assert_eq!(state.tasks[1].subtasks.len(), 1);
    assert!(state.tasks[1].subtasks[0].completed);
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn test_transient_state_is_not_restored() {
    let (temp_dir, mut store) = create_test_store();

    store.toggle_task_editing(0).expect("edit");
    store.set_pending_subtask_text(0, "half typed").expect("buffer");
    store.request_task_deletion(0).expect("request");
    drop(store);

    let store = open_store(&temp_dir);
    let state = store.state();
    assert!(!state.tasks[0].editing);
    assert!(state.tasks[0].pending_subtask_text.is_empty());
    assert_eq!(state.pending_deletion, None);
}

#[test]
fn test_confirmed_delete_is_persisted() {
    let (temp_dir, mut store) = create_test_store();
    store.add_task("second").expect("add");
    store.add_task("third").expect("add");

    store.request_task_deletion(1).expect("request");
    store.confirm_task_deletion().expect("confirm");
    drop(store);

    let store = open_store(&temp_dir);
    let titles: Vec<&str> = store.state().tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec![DEFAULT_TASK_TITLE, "third"]);
}

#[test]
fn test_stored_values_are_json() {
    let (_temp_dir, mut store) = create_test_store();
    store.add_task("Buy milk").expect("add");
    store.set_theme(Theme::Dark).expect("theme");

    let raw_tasks = store
        .storage()
        .load(TASKS_KEY)
        .expect("load")
        .expect("tasks stored");
    let value: serde_json::Value = serde_json::from_str(&raw_tasks).expect("valid json");
    assert_eq!(value[1]["title"], "Buy milk");
    assert_eq!(value[1]["completed"], false);
    assert!(value[1].get("editing").is_none());

    let raw_theme = store.storage().load(THEME_KEY).expect("load");
    assert_eq!(raw_theme.as_deref(), Some("\"dark\""));
}

#[test]
fn test_stale_index_after_delete_is_rejected() {
    let (_temp_dir, mut store) = create_test_store();
    store.add_task("second").expect("add");

    store.request_task_deletion(1).expect("request");
    store.confirm_task_deletion().expect("confirm");

    let err = store.rename_task(1, "gone").unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound { index: 1 }));
}
