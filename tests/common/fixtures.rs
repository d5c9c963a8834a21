//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use todosync::core::models::{Task, TaskPriority, TaskStatus, Todolist};

/// A list with the given id and title
pub fn list(id: &str, title: &str) -> Todolist {
    Todolist::new(id, title)
}

/// Builder for creating test tasks
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str, list_id: &str) -> Self {
        Self {
            task: Task::new(id, list_id, format!("Task {id}")),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.task.description = Some(description.to_string());
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn completed(self) -> Self {
        self.status(TaskStatus::Completed)
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// A task with default fields
pub fn task(id: &str, list_id: &str) -> Task {
    TaskBuilder::new(id, list_id).build()
}
