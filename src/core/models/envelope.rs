//! Response shapes of the remote API
//!
//! Most mutating endpoints wrap their payload in a [`ResponseEnvelope`]. A
//! `result_code` of zero is success; anything else carries human-readable
//! `messages`. Failed envelopes often ship an empty `data` object, so their
//! payload is decoded leniently into an `Option`. A successful envelope whose
//! payload does not decode is an error carrying serde's message.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};

use super::task::Task;

/// Result code the API uses for success
pub const RESULT_CODE_SUCCESS: i32 = 0;

/// Uniform response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// Zero on success
    pub result_code: i32,

    /// Human-readable messages, usually present on failure
    pub messages: Vec<String>,

    /// Per-field validation errors
    pub fields_errors: Vec<FieldError>,

    /// Payload; `None` when absent, or when a failed envelope's payload is
    /// not decodable as `T`
    pub data: Option<T>,
}

/// Wire shape of [`ResponseEnvelope`] before the payload is typed
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    result_code: i32,
    #[serde(default)]
    messages: Vec<String>,
    #[serde(default)]
    fields_errors: Vec<FieldError>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ResponseEnvelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::deserialize(deserializer)?;
        let data = match raw.data {
            Some(value) if raw.result_code == RESULT_CODE_SUCCESS => {
                Some(serde_json::from_value(value).map_err(<D::Error as de::Error>::custom)?)
            },
            Some(value) => serde_json::from_value(value).ok(),
            None => None,
        };
        Ok(Self {
            result_code: raw.result_code,
            messages: raw.messages,
            fields_errors: raw.fields_errors,
            data,
        })
    }
}

impl<T> ResponseEnvelope<T> {
    /// Successful envelope carrying `data`
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            result_code: RESULT_CODE_SUCCESS,
            messages: Vec::new(),
            fields_errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Failed envelope with the given code and messages
    #[must_use]
    pub fn failure(result_code: i32, messages: Vec<String>) -> Self {
        Self {
            result_code,
            messages,
            fields_errors: Vec::new(),
            data: None,
        }
    }

    /// Whether the server accepted the request
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result_code == RESULT_CODE_SUCCESS
    }
}

impl<T> ResponseEnvelope<Item<T>> {
    /// Unwrap the `data.item` payload of create/update responses
    #[must_use]
    pub fn into_item(self) -> Option<T> {
        self.data.map(|data| data.item)
    }
}

/// Validation error attached to one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// What is wrong with it
    pub error: String,
}

/// `{ "item": ... }` payload of create/update responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item<T> {
    /// The created or updated record
    pub item: T,
}

/// Payload of endpoints that return nothing useful
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Identity of the logged-in user (`auth/me`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeData {
    /// User id
    pub id: u64,
    /// Account email
    pub email: String,
    /// Login name
    pub login: String,
}

/// Response of the task listing endpoint (not enveloped)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksResponse {
    /// Tasks of the list, in server order
    #[serde(default)]
    pub items: Vec<Task>,
    /// Total number of tasks on the server
    #[serde(default)]
    pub total_count: u64,
    /// Error text, if the server reported one
    #[serde(default)]
    pub error: Option<String>,
}
