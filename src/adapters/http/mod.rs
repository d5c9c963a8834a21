//! HTTP implementation of the remote API port
//!
//! Talks JSON to the todo-lists backend with reqwest. The session cookie is
//! kept in the client's cookie store; an `API-KEY` header is attached when a
//! key is configured.

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::core::models::{
    Empty, GetTasksResponse, Item, MeData, ResponseEnvelope, Task, Todolist, UpdateTaskModel,
};
use crate::core::ports::{TodoApi, TransportError};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "API-KEY";

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Connection(err.to_string())
    }
}

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

/// reqwest-backed [`TodoApi`]
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for HttpApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApi")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl HttpApi {
    /// Client for the API rooted at `base_url`
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self {
            client,
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    /// Client built from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Result<Self, TransportError> {
        Self::new(&config.base_url, config.api_key.clone())
    }

    /// Base URL, always ending in `/`
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        debug!("{method} {url}");
        let mut builder = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, TransportError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TodoApi for HttpApi {
    async fn me(&self) -> Result<ResponseEnvelope<MeData>, TransportError> {
        self.send(self.request(Method::GET, "auth/me")).await
    }

    async fn get_todolists(&self) -> Result<Vec<Todolist>, TransportError> {
        self.send(self.request(Method::GET, "todo-lists")).await
    }

    async fn create_todolist(
        &self,
        title: &str,
    ) -> Result<ResponseEnvelope<Item<Todolist>>, TransportError> {
        let builder = self.request(Method::POST, "todo-lists").json(&TitleBody { title });
        self.send(builder).await
    }

    async fn delete_todolist(&self, id: &str) -> Result<ResponseEnvelope<Empty>, TransportError> {
        self.send(self.request(Method::DELETE, &format!("todo-lists/{id}"))).await
    }

    async fn update_todolist(
        &self,
        id: &str,
        title: &str,
    ) -> Result<ResponseEnvelope<Empty>, TransportError> {
        let builder =
            self.request(Method::PUT, &format!("todo-lists/{id}")).json(&TitleBody { title });
        self.send(builder).await
    }

    async fn get_tasks(&self, list_id: &str) -> Result<GetTasksResponse, TransportError> {
        self.send(self.request(Method::GET, &format!("todo-lists/{list_id}/tasks"))).await
    }

    async fn create_task(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ResponseEnvelope<Item<Task>>, TransportError> {
        let builder = self
            .request(Method::POST, &format!("todo-lists/{list_id}/tasks"))
            .json(&TitleBody { title });
        self.send(builder).await
    }

    async fn update_task(
        &self,
        list_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> Result<ResponseEnvelope<Item<Task>>, TransportError> {
        let builder = self
            .request(Method::PUT, &format!("todo-lists/{list_id}/tasks/{task_id}"))
            .json(model);
        self.send(builder).await
    }

    async fn delete_task(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<ResponseEnvelope<Empty>, TransportError> {
        self.send(self.request(Method::DELETE, &format!("todo-lists/{list_id}/tasks/{task_id}")))
            .await
    }
}
