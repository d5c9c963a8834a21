//! List collection store
//!
//! An ordered sequence of lists, newest first, with unique ids. Every
//! transition is a pure step over that sequence; commands naming an unknown
//! id are no-ops. Adding a list whose id is already present replaces its
//! record in place and keeps its annotations.

use crate::core::models::{FilterValue, RequestStatus, Todolist, TodolistDomain};

/// State of the list collection
pub type TodolistsState = Vec<TodolistDomain>;

/// Commands accepted by the list collection store
///
/// The task store also observes these (see [`super::tasks::on_todolists`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodolistsCommand {
    /// Prepend a freshly created list
    AddTodolist(Todolist),
    /// Drop a list
    RemoveTodolist {
        /// List id
        id: String,
    },
    /// Change which tasks a list shows
    ChangeTodolistFilter {
        /// List id
        id: String,
        /// New filter
        filter: FilterValue,
    },
    /// Rename a list
    ChangeTodolistTitle {
        /// List id
        id: String,
        /// New title
        title: String,
    },
    /// Replace the whole collection
    SetTodolists(Vec<Todolist>),
    /// Update the per-list request status
    ChangeTodolistEntityStatus {
        /// List id
        id: String,
        /// New status
        status: RequestStatus,
    },
}

/// Apply one command
#[must_use]
pub fn reduce(mut state: TodolistsState, command: &TodolistsCommand) -> TodolistsState {
    match command {
        TodolistsCommand::AddTodolist(list) => match find_mut(&mut state, &list.id) {
            Some(tl) => tl.list = list.clone(),
            None => state.insert(0, TodolistDomain::from(list.clone())),
        },
        TodolistsCommand::RemoveTodolist { id } => {
            state.retain(|tl| tl.id() != id);
        },
        TodolistsCommand::ChangeTodolistFilter { id, filter } => {
            if let Some(tl) = find_mut(&mut state, id) {
                tl.filter = *filter;
            }
        },
        TodolistsCommand::ChangeTodolistTitle { id, title } => {
            if let Some(tl) = find_mut(&mut state, id) {
                tl.list.title.clone_from(title);
            }
        },
        TodolistsCommand::SetTodolists(lists) => {
            let mut next = TodolistsState::with_capacity(lists.len());
            for list in lists {
                if find_mut(&mut next, &list.id).is_none() {
                    next.push(TodolistDomain::from(list.clone()));
                }
            }
            return next;
        },
        TodolistsCommand::ChangeTodolistEntityStatus { id, status } => {
            if let Some(tl) = find_mut(&mut state, id) {
                tl.entity_status = *status;
            }
        },
    }
    state
}

fn find_mut<'a>(state: &'a mut TodolistsState, id: &str) -> Option<&'a mut TodolistDomain> {
    state.iter_mut().find(|tl| tl.id() == id)
}
