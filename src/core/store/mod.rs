//! In-memory state
//!
//! Each store is a state type, a tagged command enum and a pure transition
//! `reduce(state, &command) -> state`:
//!
//! - [`app`] - global request status, error message, initialization flag
//! - [`auth`] - whether the session is authenticated
//! - [`todolists`] - ordered list collection
//! - [`tasks`] - tasks keyed by list id
//!
//! [`Store`] composes them behind a single [`Store::dispatch`]. List commands
//! are routed to both the list and the task reducer so the task collection
//! always has exactly one entry per list.

pub mod app;
pub mod auth;
pub mod tasks;
pub mod todolists;

use log::debug;
use serde::Serialize;

pub use app::{AppCommand, AppState};
pub use auth::{AuthCommand, AuthState};
pub use tasks::{TasksCommand, TasksState};
pub use todolists::{TodolistsCommand, TodolistsState};

use crate::core::models::{FilterValue, Task, TodolistDomain};

/// Any command the root store accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Application-status command
    App(AppCommand),
    /// Auth command
    Auth(AuthCommand),
    /// List collection command (also observed by the task store)
    Todolists(TodolistsCommand),
    /// Task collection command
    Tasks(TasksCommand),
}

impl From<AppCommand> for Action {
    fn from(command: AppCommand) -> Self {
        Self::App(command)
    }
}

impl From<AuthCommand> for Action {
    fn from(command: AuthCommand) -> Self {
        Self::Auth(command)
    }
}

impl From<TodolistsCommand> for Action {
    fn from(command: TodolistsCommand) -> Self {
        Self::Todolists(command)
    }
}

impl From<TasksCommand> for Action {
    fn from(command: TasksCommand) -> Self {
        Self::Tasks(command)
    }
}

/// Combined state of every store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootState {
    /// Application status
    pub app: AppState,
    /// Session state
    pub auth: AuthState,
    /// Lists, newest first
    pub todolists: TodolistsState,
    /// Tasks keyed by list id
    pub tasks: TasksState,
}

/// Apply one action to the combined state
#[must_use]
pub fn reduce(state: RootState, action: &Action) -> RootState {
    let RootState {
        app,
        auth,
        todolists,
        tasks,
    } = state;

    match action {
        Action::App(command) => RootState {
            app: app::reduce(app, command),
            auth,
            todolists,
            tasks,
        },
        Action::Auth(command) => RootState {
            app,
            auth: auth::reduce(auth, command),
            todolists,
            tasks,
        },
        Action::Todolists(command) => RootState {
            app,
            auth,
            todolists: todolists::reduce(todolists, command),
            tasks: tasks::on_todolists(tasks, command),
        },
        Action::Tasks(command) => RootState {
            app,
            auth,
            todolists,
            tasks: tasks::reduce(tasks, command),
        },
    }
}

/// Owner of the combined state
///
/// Mutation only happens through [`Store::dispatch`], in call order.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: RootState,
    revision: u64,
}

impl Store {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!("dispatch {action:?}");
        self.state = reduce(std::mem::take(&mut self.state), &action);
        self.revision += 1;
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &RootState {
        &self.state
    }

    /// Number of actions dispatched so far
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Look up a list by id
    #[must_use]
    pub fn todolist(&self, id: &str) -> Option<&TodolistDomain> {
        self.state.todolists.iter().find(|tl| tl.id() == id)
    }

    /// Tasks of a list, or `None` if the list has no entry
    #[must_use]
    pub fn tasks(&self, list_id: &str) -> Option<&[Task]> {
        self.state.tasks.get(list_id).map(Vec::as_slice)
    }

    /// Look up one task
    #[must_use]
    pub fn task(&self, list_id: &str, task_id: &str) -> Option<&Task> {
        self.tasks(list_id)?.iter().find(|t| t.id == task_id)
    }

    /// Tasks of a list that pass the list's filter
    #[must_use]
    pub fn visible_tasks(&self, list_id: &str) -> Vec<&Task> {
        let filter = self.todolist(list_id).map_or(FilterValue::All, |tl| tl.filter);
        self.tasks(list_id)
            .unwrap_or_default()
            .iter()
            .filter(|t| match filter {
                FilterValue::All => true,
                FilterValue::Active => !t.is_completed(),
                FilterValue::Completed => t.is_completed(),
            })
            .collect()
    }
}
