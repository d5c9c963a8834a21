//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{FilterValue, RequestStatus, Task, TodolistDomain};
use crate::core::store::{AppState, Store};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Global status line attached to every snapshot
#[derive(Debug, Serialize)]
pub struct StatusInfo {
    /// Global request status
    pub status: RequestStatus,
    /// Latest error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&AppState> for StatusInfo {
    fn from(app: &AppState) -> Self {
        Self {
            status: app.status,
            error: app.error.clone(),
        }
    }
}

/// A list as shown to the user
#[derive(Debug, Serialize)]
pub struct ListInfo {
    /// List id
    pub id: String,
    /// Title
    pub title: String,
    /// Active filter
    pub filter: FilterValue,
    /// Per-list request status
    pub entity_status: RequestStatus,
    /// Number of tasks held locally for the list
    pub task_count: usize,
}

impl ListInfo {
    fn new(list: &TodolistDomain, store: &Store) -> Self {
        Self {
            id: list.id().to_string(),
            title: list.title().to_string(),
            filter: list.filter,
            entity_status: list.entity_status,
            task_count: store.tasks(list.id()).map_or(0, <[Task]>::len),
        }
    }
}

/// Snapshot of the list collection
#[derive(Debug, Serialize)]
pub struct ListsResult {
    /// Lists, newest first
    pub lists: Vec<ListInfo>,
    /// Global status
    pub app: StatusInfo,
}

impl ListsResult {
    /// Build from the current store
    #[must_use]
    pub fn from_store(store: &Store) -> Self {
        Self {
            lists: store
                .state()
                .todolists
                .iter()
                .map(|tl| ListInfo::new(tl, store))
                .collect(),
            app: StatusInfo::from(&store.state().app),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.lists.is_empty() {
            println!("No lists.");
        } else {
            println!("Lists:\n");
            for l in &self.lists {
                println!("  [{}] {} ({} task(s))", l.id.dimmed(), l.title.bold(), l.task_count);
            }
        }
        render_status_human(&self.app);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A task as shown to the user
#[derive(Debug, Serialize)]
pub struct TaskInfo {
    /// Task id
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Status
    pub status: String,
    /// Priority
    pub priority: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            completed: task.is_completed(),
            deadline: task.deadline.clone(),
        }
    }
}

/// Snapshot of one list's visible tasks
#[derive(Debug, Serialize)]
pub struct TasksResult {
    /// List id
    pub list_id: String,
    /// List title, if the list is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Filter in effect
    pub filter: FilterValue,
    /// Tasks passing the filter
    pub tasks: Vec<TaskInfo>,
    /// Global status
    pub app: StatusInfo,
}

impl TasksResult {
    /// Build from the current store
    #[must_use]
    pub fn from_store(store: &Store, list_id: &str) -> Self {
        let list = store.todolist(list_id);
        Self {
            list_id: list_id.to_string(),
            title: list.map(|tl| tl.title().to_string()),
            filter: list.map_or(FilterValue::All, |tl| tl.filter),
            tasks: store.visible_tasks(list_id).into_iter().map(TaskInfo::from).collect(),
            app: StatusInfo::from(&store.state().app),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let title = self.title.as_deref().unwrap_or(&self.list_id);
        println!("{} [{}]\n", title.bold(), self.filter);
        if self.tasks.is_empty() {
            println!("  No tasks.");
        }
        for t in &self.tasks {
            let mark = if t.completed {
                "[x]".green()
            } else {
                "[ ]".normal()
            };
            println!("  {mark} {} {}", t.title, format!("({}, {})", t.id, t.priority).dimmed());
            if let Some(description) = &t.description {
                println!("        {description}");
            }
        }
        println!();
        render_status_human(&self.app);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of the identity check
#[derive(Debug, Serialize)]
pub struct WhoamiResult {
    /// Whether the session is authenticated
    pub logged_in: bool,
    /// Whether initialization completed
    pub initialized: bool,
    /// Base URL that was queried
    pub base_url: String,
}

impl WhoamiResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.logged_in {
                    println!("{} at {}", "Logged in".green(), self.base_url);
                } else {
                    println!("{} at {}", "Not logged in".yellow(), self.base_url);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn render_status_human(app: &StatusInfo) {
    let status = match app.status {
        RequestStatus::Succeeded => app.status.to_string().green(),
        RequestStatus::Failed => app.status.to_string().red(),
        RequestStatus::Idle | RequestStatus::Loading => app.status.to_string().normal(),
    };
    println!("Status: {status}");
    if let Some(error) = &app.error {
        println!("Error: {}", error.red());
    }
}
