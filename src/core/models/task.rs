//! Task model
//!
//! A task belongs to exactly one to-do list (`todo_list_id`). Status and
//! priority travel as integers on the wire.

use serde::{Deserialize, Serialize};

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    /// Freshly created
    #[default]
    New,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
    /// Not yet published
    Draft,
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::New => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Draft => 3,
        }
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::New),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            3 => Ok(Self::Draft),
            _ => Err(format!("Invalid task status code: {value}")),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
            Self::Draft => write!(f, "draft"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "new" | "0" => Ok(Self::New),
            "in_progress" | "inprogress" | "1" => Ok(Self::InProgress),
            "completed" | "done" | "2" => Ok(Self::Completed),
            "draft" | "3" => Ok(Self::Draft),
            _ => Err(format!("Invalid status: {s}. Use: new, in_progress, completed, draft")),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    /// Low
    #[default]
    Low,
    /// Middle
    Middle,
    /// High
    Hi,
    /// Urgent
    Urgently,
    /// Deferred
    Later,
}

impl From<TaskPriority> for u8 {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Low => 0,
            TaskPriority::Middle => 1,
            TaskPriority::Hi => 2,
            TaskPriority::Urgently => 3,
            TaskPriority::Later => 4,
        }
    }
}

impl TryFrom<u8> for TaskPriority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::Middle),
            2 => Ok(Self::Hi),
            3 => Ok(Self::Urgently),
            4 => Ok(Self::Later),
            _ => Err(format!("Invalid task priority code: {value}")),
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Middle => write!(f, "middle"),
            Self::Hi => write!(f, "hi"),
            Self::Urgently => write!(f, "urgently"),
            Self::Later => write!(f, "later"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "0" => Ok(Self::Low),
            "middle" | "medium" | "1" => Ok(Self::Middle),
            "hi" | "high" | "2" => Ok(Self::Hi),
            "urgently" | "urgent" | "3" => Ok(Self::Urgently),
            "later" | "4" => Ok(Self::Later),
            _ => Err(format!(
                "Invalid priority: {s}. Use: low, middle, hi, urgently, later (or 0-4)"
            )),
        }
    }
}

/// A task as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier
    pub id: String,

    /// Owning list
    pub todo_list_id: String,

    /// What needs to be done
    pub title: String,

    /// Optional longer text
    #[serde(default)]
    pub description: Option<String>,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Priority level
    #[serde(default)]
    pub priority: TaskPriority,

    /// Planned start (server timestamp)
    #[serde(default)]
    pub start_date: Option<String>,

    /// Due date (server timestamp)
    #[serde(default)]
    pub deadline: Option<String>,

    /// When the task was created (server timestamp)
    #[serde(default)]
    pub added_date: String,

    /// Server-side ordering key
    #[serde(default)]
    pub order: i64,
}

impl Task {
    /// Create a task with default status and priority
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        todo_list_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            todo_list_id: todo_list_id.into(),
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            start_date: None,
            deadline: None,
            added_date: String::new(),
            order: 0,
        }
    }

    /// Whether the task counts as done for filtering
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Overwrite the fields present in `patch`
    pub fn apply(&mut self, patch: &UpdateDomainTaskModel) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(start_date) = &patch.start_date {
            self.start_date = Some(start_date.clone());
        }
        if let Some(deadline) = &patch.deadline {
            self.deadline = Some(deadline.clone());
        }
    }
}

/// Full update payload; the remote API rejects partial updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskModel {
    /// Title
    pub title: String,
    /// Description
    pub description: Option<String>,
    /// Status
    pub status: TaskStatus,
    /// Priority
    pub priority: TaskPriority,
    /// Planned start
    pub start_date: Option<String>,
    /// Due date
    pub deadline: Option<String>,
}

impl UpdateTaskModel {
    /// Build the full payload from the current record with `patch` laid over it
    #[must_use]
    pub fn merged(task: &Task, patch: &UpdateDomainTaskModel) -> Self {
        let mut merged = task.clone();
        merged.apply(patch);
        Self::from(merged)
    }
}

impl From<Task> for UpdateTaskModel {
    fn from(task: Task) -> Self {
        Self {
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            start_date: task.start_date,
            deadline: task.deadline,
        }
    }
}

/// Partial update coming from the UI; absent fields stay untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainTaskModel {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// New planned start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// New due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl UpdateDomainTaskModel {
    /// Patch that only changes the status
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Patch that only changes the title
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
