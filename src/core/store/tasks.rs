//! Task collection store
//!
//! Maps a list id to that list's tasks, newest first. An entry exists for
//! exactly the lists in the list collection; entries follow list commands via
//! [`on_todolists`]. Task commands naming a list without an entry are dropped
//! so no task can outlive its list, and a task is only ever filed under the
//! list its `todo_list_id` names.

use std::collections::BTreeMap;

use log::warn;

use super::todolists::TodolistsCommand;
use crate::core::models::{Task, UpdateDomainTaskModel};

/// State of the task collection, keyed by list id
pub type TasksState = BTreeMap<String, Vec<Task>>;

/// Commands accepted by the task collection store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksCommand {
    /// Drop one task
    RemoveTask {
        /// Task id
        task_id: String,
        /// Owning list
        list_id: String,
    },
    /// Prepend a freshly created task to its list
    AddTask(Task),
    /// Merge a partial update into one task
    UpdateTask {
        /// Task id
        task_id: String,
        /// Fields to overwrite
        patch: UpdateDomainTaskModel,
        /// Owning list
        list_id: String,
    },
    /// Replace the tasks of one list
    SetTasks {
        /// New tasks, in server order
        tasks: Vec<Task>,
        /// Owning list
        list_id: String,
    },
}

/// Apply one task command
#[must_use]
pub fn reduce(mut state: TasksState, command: &TasksCommand) -> TasksState {
    match command {
        TasksCommand::RemoveTask { task_id, list_id } => {
            if let Some(tasks) = state.get_mut(list_id) {
                tasks.retain(|t| &t.id != task_id);
            }
        },
        TasksCommand::AddTask(task) => match state.get_mut(&task.todo_list_id) {
            Some(tasks) => tasks.insert(0, task.clone()),
            None => warn!("Dropping task {} for unknown list {}", task.id, task.todo_list_id),
        },
        TasksCommand::UpdateTask {
            task_id,
            patch,
            list_id,
        } => {
            if let Some(task) = state
                .get_mut(list_id)
                .and_then(|tasks| tasks.iter_mut().find(|t| &t.id == task_id))
            {
                task.apply(patch);
            }
        },
        TasksCommand::SetTasks { tasks, list_id } => match state.get_mut(list_id) {
            Some(entry) => {
                *entry = tasks
                    .iter()
                    .filter(|t| {
                        let owned = &t.todo_list_id == list_id;
                        if !owned {
                            warn!(
                                "Dropping task {} of list {} from list {list_id}",
                                t.id, t.todo_list_id
                            );
                        }
                        owned
                    })
                    .cloned()
                    .collect();
            },
            None => warn!("Ignoring {} task(s) for unknown list {list_id}", tasks.len()),
        },
    }
    state
}

/// Keep entries in step with the list collection
#[must_use]
pub fn on_todolists(mut state: TasksState, command: &TodolistsCommand) -> TasksState {
    match command {
        TodolistsCommand::AddTodolist(list) => {
            state.entry(list.id.clone()).or_default();
        },
        TodolistsCommand::RemoveTodolist { id } => {
            state.remove(id);
        },
        TodolistsCommand::SetTodolists(lists) => {
            return lists.iter().map(|tl| (tl.id.clone(), Vec::new())).collect();
        },
        TodolistsCommand::ChangeTodolistFilter { .. }
        | TodolistsCommand::ChangeTodolistTitle { .. }
        | TodolistsCommand::ChangeTodolistEntityStatus { .. } => {},
    }
    state
}
