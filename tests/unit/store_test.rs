//! Tests for the in-memory stores
//!
//! Every state change goes through `Store::dispatch`; these tests drive the
//! reducers the way the coordinators do.

use todosync::core::models::{FilterValue, RequestStatus, TaskStatus, UpdateDomainTaskModel};
use todosync::core::store::{
    AppCommand, AuthCommand, Store, TasksCommand, TodolistsCommand,
};

use crate::common::fixtures::{TaskBuilder, list, task};

fn store_with_lists(ids: &[&str]) -> Store {
    let mut store = Store::new();
    store.dispatch(TodolistsCommand::SetTodolists(
        ids.iter().map(|id| list(id, &format!("List {id}"))).collect(),
    ));
    store
}

fn task_ids(store: &Store, list_id: &str) -> Vec<String> {
    store
        .tasks(list_id)
        .unwrap_or_default()
        .iter()
        .map(|t| t.id.clone())
        .collect()
}

// =============================================================================
// APP STATUS
// =============================================================================

#[test]
fn test_app_state_defaults() {
    let store = Store::new();
    let app = &store.state().app;
    assert_eq!(app.status, RequestStatus::Idle);
    assert!(app.error.is_none());
    assert!(!app.is_initialized);
    assert!(!store.state().auth.is_logged_in);
}

#[test]
fn test_app_commands_touch_only_their_field() {
    let mut store = Store::new();
    store.dispatch(AppCommand::SetError(Some("boom".to_string())));
    store.dispatch(AppCommand::SetStatus(RequestStatus::Failed));
    store.dispatch(AppCommand::SetInitialized(true));

    let app = &store.state().app;
    assert_eq!(app.error.as_deref(), Some("boom"));
    assert_eq!(app.status, RequestStatus::Failed);
    assert!(app.is_initialized);

    store.dispatch(AppCommand::SetError(None));
    assert!(store.state().app.error.is_none());
    assert_eq!(store.state().app.status, RequestStatus::Failed);
}

#[test]
fn test_auth_login_flag() {
    let mut store = Store::new();
    store.dispatch(AuthCommand::SetIsLoggedIn(true));
    assert!(store.state().auth.is_logged_in);
    store.dispatch(AuthCommand::SetIsLoggedIn(false));
    assert!(!store.state().auth.is_logged_in);
}

// =============================================================================
// LIST COLLECTION
// =============================================================================

#[test]
fn test_add_todolist_prepends_with_defaults() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TodolistsCommand::AddTodolist(list("b", "Groceries")));

    let lists = &store.state().todolists;
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].id(), "b");
    assert_eq!(lists[0].title(), "Groceries");
    assert_eq!(lists[0].filter, FilterValue::All);
    assert_eq!(lists[0].entity_status, RequestStatus::Idle);
    assert_eq!(store.tasks("b"), Some(&[][..]));
}

#[test]
fn test_add_existing_todolist_keeps_single_entry_and_tasks() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "a")));
    store.dispatch(TodolistsCommand::AddTodolist(list("a", "Again")));

    assert_eq!(store.state().todolists.len(), 1);
    assert_eq!(store.todolist("a").unwrap().title(), "Again");
    assert_eq!(task_ids(&store, "a"), vec!["t1"]);
}

#[test]
fn test_remove_todolist_drops_list_and_tasks() {
    let mut store = store_with_lists(&["a", "b"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "a")));
    store.dispatch(TodolistsCommand::RemoveTodolist { id: "a".to_string() });

    assert!(store.todolist("a").is_none());
    assert!(store.tasks("a").is_none());
    assert!(store.todolist("b").is_some());
}

#[test]
fn test_remove_unknown_todolist_is_noop() {
    let mut store = store_with_lists(&["a"]);
    let before = store.state().clone();
    store.dispatch(TodolistsCommand::RemoveTodolist { id: "zzz".to_string() });
    assert_eq!(store.state(), &before);
}

#[test]
fn test_change_title_filter_and_entity_status() {
    let mut store = store_with_lists(&["a", "b"]);
    store.dispatch(TodolistsCommand::ChangeTodolistTitle {
        id: "a".to_string(),
        title: "Renamed".to_string(),
    });
    store.dispatch(TodolistsCommand::ChangeTodolistFilter {
        id: "a".to_string(),
        filter: FilterValue::Completed,
    });
    store.dispatch(TodolistsCommand::ChangeTodolistEntityStatus {
        id: "b".to_string(),
        status: RequestStatus::Loading,
    });

    let a = store.todolist("a").unwrap();
    assert_eq!(a.title(), "Renamed");
    assert_eq!(a.filter, FilterValue::Completed);
    assert_eq!(a.entity_status, RequestStatus::Idle);

    let b = store.todolist("b").unwrap();
    assert_eq!(b.title(), "List b");
    assert_eq!(b.entity_status, RequestStatus::Loading);
}

#[test]
fn test_set_todolists_resets_annotations_and_task_entries() {
    let mut store = store_with_lists(&["old"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "old")));
    store.dispatch(TodolistsCommand::ChangeTodolistFilter {
        id: "old".to_string(),
        filter: FilterValue::Active,
    });

    store.dispatch(TodolistsCommand::SetTodolists(vec![list("L1", "One"), list("L2", "Two")]));

    let ids: Vec<&str> = store.state().todolists.iter().map(|tl| tl.id()).collect();
    assert_eq!(ids, vec!["L1", "L2"]);
    assert!(
        store
            .state()
            .todolists
            .iter()
            .all(|tl| tl.filter == FilterValue::All && tl.entity_status == RequestStatus::Idle)
    );
    let keys: Vec<&String> = store.state().tasks.keys().collect();
    assert_eq!(keys, vec!["L1", "L2"]);
    assert!(store.state().tasks.values().all(Vec::is_empty));
}

#[test]
fn test_set_todolists_clears_same_ids() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "a")));
    store.dispatch(TodolistsCommand::SetTodolists(vec![list("a", "Again")]));
    assert_eq!(store.tasks("a"), Some(&[][..]));
}

// =============================================================================
// TASK COLLECTION
// =============================================================================

#[test]
fn test_add_task_prepends() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "a")));
    store.dispatch(TasksCommand::AddTask(task("t2", "a")));
    assert_eq!(task_ids(&store, "a"), vec!["t2", "t1"]);
}

#[test]
fn test_add_task_for_unknown_list_is_dropped() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "ghost")));
    assert!(store.tasks("ghost").is_none());
    assert_eq!(store.state().tasks.len(), 1);
}

#[test]
fn test_set_tasks_replaces_one_list_only() {
    let mut store = store_with_lists(&["a", "b"]);
    store.dispatch(TasksCommand::AddTask(task("b1", "b")));
    store.dispatch(TasksCommand::SetTasks {
        tasks: vec![task("a1", "a"), task("a2", "a")],
        list_id: "a".to_string(),
    });
    assert_eq!(task_ids(&store, "a"), vec!["a1", "a2"]);
    assert_eq!(task_ids(&store, "b"), vec!["b1"]);
}

#[test]
fn test_set_tasks_for_unknown_list_is_dropped() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::SetTasks {
        tasks: vec![task("x", "ghost")],
        list_id: "ghost".to_string(),
    });
    assert!(store.tasks("ghost").is_none());
}

#[test]
fn test_set_tasks_drops_tasks_filed_under_another_list() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::SetTasks {
        tasks: vec![task("x", "zzz"), task("a1", "a")],
        list_id: "a".to_string(),
    });
    assert_eq!(task_ids(&store, "a"), vec!["a1"]);
    assert!(store.tasks("zzz").is_none());
}

#[test]
fn test_update_task_merges_patch() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(
        TaskBuilder::new("t1", "a").title("Milk").description("2 litres").build(),
    ));
    store.dispatch(TasksCommand::UpdateTask {
        task_id: "t1".to_string(),
        patch: UpdateDomainTaskModel::status(TaskStatus::Completed),
        list_id: "a".to_string(),
    });

    let t = store.task("a", "t1").unwrap();
    assert_eq!(t.status, TaskStatus::Completed);
    assert_eq!(t.title, "Milk");
    assert_eq!(t.description.as_deref(), Some("2 litres"));
}

#[test]
fn test_update_missing_task_is_noop() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "a")));
    let before = store.state().clone();
    store.dispatch(TasksCommand::UpdateTask {
        task_id: "nope".to_string(),
        patch: UpdateDomainTaskModel::title("x"),
        list_id: "a".to_string(),
    });
    assert_eq!(store.state(), &before);
}

#[test]
fn test_add_then_remove_task() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(task("t1", "a")));
    store.dispatch(TasksCommand::AddTask(task("t2", "a")));
    store.dispatch(TasksCommand::RemoveTask {
        task_id: "t1".to_string(),
        list_id: "a".to_string(),
    });
    assert_eq!(task_ids(&store, "a"), vec!["t2"]);
}

// =============================================================================
// STORE
// =============================================================================

#[test]
fn test_dispatch_bumps_revision() {
    let mut store = Store::new();
    assert_eq!(store.revision(), 0);
    store.dispatch(AppCommand::SetStatus(RequestStatus::Loading));
    store.dispatch(AuthCommand::SetIsLoggedIn(true));
    assert_eq!(store.revision(), 2);
}

#[test]
fn test_visible_tasks_follow_filter() {
    let mut store = store_with_lists(&["a"]);
    store.dispatch(TasksCommand::AddTask(task("open", "a")));
    store.dispatch(TasksCommand::AddTask(TaskBuilder::new("done", "a").completed().build()));

    let ids = |store: &Store| -> Vec<String> {
        store.visible_tasks("a").iter().map(|t| t.id.clone()).collect()
    };
    assert_eq!(ids(&store), vec!["done", "open"]);

    store.dispatch(TodolistsCommand::ChangeTodolistFilter {
        id: "a".to_string(),
        filter: FilterValue::Active,
    });
    assert_eq!(ids(&store), vec!["open"]);

    store.dispatch(TodolistsCommand::ChangeTodolistFilter {
        id: "a".to_string(),
        filter: FilterValue::Completed,
    });
    assert_eq!(ids(&store), vec!["done"]);
}

#[test]
fn test_visible_tasks_of_unknown_list_is_empty() {
    let store = Store::new();
    assert!(store.visible_tasks("nope").is_empty());
}
