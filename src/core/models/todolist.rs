//! Todo list model
//!
//! [`Todolist`] is the record the server owns. [`TodolistDomain`] adds the
//! client-only annotations the UI needs (filter and per-list request status).

use serde::{Deserialize, Serialize};

use super::status::{FilterValue, RequestStatus};

/// A to-do list as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    /// Server-assigned identifier
    pub id: String,

    /// List title
    pub title: String,

    /// When the list was created (server timestamp, passed through verbatim)
    #[serde(default)]
    pub added_date: String,

    /// Server-side ordering key
    #[serde(default)]
    pub order: i64,
}

impl Todolist {
    /// Create a list record with the given id and title
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            added_date: String::new(),
            order: 0,
        }
    }
}

/// A to-do list together with its client-side annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodolistDomain {
    /// The server record
    #[serde(flatten)]
    pub list: Todolist,

    /// Which tasks are shown
    pub filter: FilterValue,

    /// Status of the last operation on this list; UI controls are disabled
    /// while it is `loading`
    pub entity_status: RequestStatus,
}

impl From<Todolist> for TodolistDomain {
    fn from(list: Todolist) -> Self {
        Self {
            list,
            filter: FilterValue::All,
            entity_status: RequestStatus::Idle,
        }
    }
}

impl TodolistDomain {
    /// Server identifier of the list
    #[must_use]
    pub fn id(&self) -> &str {
        &self.list.id
    }

    /// Title of the list
    #[must_use]
    pub fn title(&self) -> &str {
        &self.list.title
    }
}
