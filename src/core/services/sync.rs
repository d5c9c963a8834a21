//! Coordinators
//!
//! Each coordinator issues one remote call and applies its outcome to the
//! stores. The pattern is the same everywhere:
//!
//! 1. set the global status to `loading` (where the operation is user-visible)
//! 2. call the [`TodoApi`]
//! 3. on result code 0, dispatch the state transition and set `succeeded`
//! 4. otherwise route the failure through [`super::errors`]
//!
//! Local state is only touched once the server has accepted the change. The
//! returned `Result` is the authoritative outcome of the operation; the global
//! status is shared by every coordinator and reflects whichever finished last.

use log::{info, warn};

use super::errors::{SyncError, handle_server_app_error, handle_server_network_error};
use crate::core::models::{
    FilterValue, RequestStatus, Task, Todolist, UpdateDomainTaskModel, UpdateTaskModel,
};
use crate::core::ports::{TodoApi, TransportError};
use crate::core::store::{AppCommand, AuthCommand, Store, TasksCommand, TodolistsCommand};

/// Runs coordinators against a remote API and owns the resulting state
#[derive(Debug)]
pub struct Synchronizer<A> {
    api: A,
    store: Store,
}

impl<A: TodoApi> Synchronizer<A> {
    /// Coordinator set with empty stores
    pub fn new(api: A) -> Self {
        Self::with_store(api, Store::new())
    }

    /// Coordinator set over an existing store
    pub const fn with_store(api: A, store: Store) -> Self {
        Self { api, store }
    }

    /// Current state
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Remote API in use
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Give back the API and the store
    pub fn into_parts(self) -> (A, Store) {
        (self.api, self.store)
    }

    /// Identity check at startup
    ///
    /// Returns whether the session is authenticated. The application is marked
    /// initialized whatever the outcome.
    pub async fn initialize_app(&mut self) -> Result<bool, SyncError> {
        let result = match self.api.me().await {
            Ok(envelope) => {
                let logged_in = envelope.is_success();
                self.store.dispatch(AuthCommand::SetIsLoggedIn(logged_in));
                if let Some(me) = envelope.data.filter(|_| logged_in) {
                    info!("Authenticated as {} <{}>", me.login, me.email);
                }
                Ok(logged_in)
            },
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        };
        self.store.dispatch(AppCommand::SetInitialized(true));
        result
    }

    /// Load every list, replacing the local collection
    pub async fn fetch_todolists(&mut self) -> Result<usize, SyncError> {
        self.set_status(RequestStatus::Loading);
        match self.api.get_todolists().await {
            Ok(lists) => {
                let count = lists.len();
                self.store.dispatch(TodolistsCommand::SetTodolists(lists));
                self.set_status(RequestStatus::Succeeded);
                info!("Fetched {count} list(s)");
                Ok(count)
            },
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        }
    }

    /// Create a list and prepend it locally
    pub async fn add_todolist(&mut self, title: &str) -> Result<Todolist, SyncError> {
        self.set_status(RequestStatus::Loading);
        match self.api.create_todolist(title).await {
            Ok(envelope) if envelope.is_success() => {
                let Some(list) = envelope.into_item() else {
                    return Err(self.malformed("created list missing from response"));
                };
                self.store.dispatch(TodolistsCommand::AddTodolist(list.clone()));
                self.set_status(RequestStatus::Succeeded);
                info!("Created list {} ({})", list.id, list.title);
                Ok(list)
            },
            Ok(envelope) => Err(handle_server_app_error(&envelope, &mut self.store)),
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        }
    }

    /// Delete a list and, with it, its tasks
    ///
    /// The list is marked `loading` while the call is in flight and `failed`
    /// if the server does not accept the deletion.
    pub async fn remove_todolist(&mut self, id: &str) -> Result<(), SyncError> {
        self.set_status(RequestStatus::Loading);
        self.set_entity_status(id, RequestStatus::Loading);

        let outcome = match self.api.delete_todolist(id).await {
            Ok(envelope) if envelope.is_success() => {
                self.store.dispatch(TodolistsCommand::RemoveTodolist { id: id.to_string() });
                self.set_status(RequestStatus::Succeeded);
                info!("Removed list {id}");
                return Ok(());
            },
            Ok(envelope) => handle_server_app_error(&envelope, &mut self.store),
            Err(err) => handle_server_network_error(&err, &mut self.store),
        };
        self.set_entity_status(id, RequestStatus::Failed);
        Err(outcome)
    }

    /// Rename a list
    pub async fn change_todolist_title(&mut self, id: &str, title: &str) -> Result<(), SyncError> {
        match self.api.update_todolist(id, title).await {
            Ok(envelope) if envelope.is_success() => {
                self.store.dispatch(TodolistsCommand::ChangeTodolistTitle {
                    id: id.to_string(),
                    title: title.to_string(),
                });
                Ok(())
            },
            Ok(envelope) => Err(handle_server_app_error(&envelope, &mut self.store)),
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        }
    }

    /// Change which tasks a list shows; purely local
    pub fn change_todolist_filter(&mut self, id: &str, filter: FilterValue) {
        self.store.dispatch(TodolistsCommand::ChangeTodolistFilter {
            id: id.to_string(),
            filter,
        });
    }

    /// Load the tasks of one list, replacing its local sequence
    ///
    /// The list must already be in the store; otherwise nothing is requested
    /// and [`SyncError::ListNotFound`] is returned.
    pub async fn fetch_tasks(&mut self, list_id: &str) -> Result<usize, SyncError> {
        self.require_list(list_id)?;
        self.set_status(RequestStatus::Loading);
        match self.api.get_tasks(list_id).await {
            Ok(response) => {
                self.store.dispatch(TasksCommand::SetTasks {
                    tasks: response.items,
                    list_id: list_id.to_string(),
                });
                let count = self.store.tasks(list_id).map_or(0, <[Task]>::len);
                self.set_status(RequestStatus::Succeeded);
                info!("Fetched {count} task(s) for list {list_id}");
                Ok(count)
            },
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        }
    }

    /// Create a task and prepend it to its list
    pub async fn add_task(&mut self, title: &str, list_id: &str) -> Result<Task, SyncError> {
        self.require_list(list_id)?;
        self.set_status(RequestStatus::Loading);
        match self.api.create_task(list_id, title).await {
            Ok(envelope) if envelope.is_success() => {
                let Some(task) = envelope.into_item() else {
                    return Err(self.malformed("created task missing from response"));
                };
                if task.todo_list_id != list_id {
                    return Err(self.malformed("created task belongs to another list"));
                }
                self.store.dispatch(TasksCommand::AddTask(task.clone()));
                self.set_status(RequestStatus::Succeeded);
                info!("Created task {} in list {list_id}", task.id);
                Ok(task)
            },
            Ok(envelope) => Err(handle_server_app_error(&envelope, &mut self.store)),
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        }
    }

    /// Delete a task
    pub async fn remove_task(&mut self, task_id: &str, list_id: &str) -> Result<(), SyncError> {
        match self.api.delete_task(list_id, task_id).await {
            Ok(envelope) if envelope.is_success() => {
                self.store.dispatch(TasksCommand::RemoveTask {
                    task_id: task_id.to_string(),
                    list_id: list_id.to_string(),
                });
                Ok(())
            },
            Ok(envelope) => Err(handle_server_app_error(&envelope, &mut self.store)),
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        }
    }

    /// Apply a partial update to a task
    ///
    /// The API wants every editable field, so the patch is laid over the
    /// locally known record. A task missing from the store is reported as
    /// [`SyncError::TaskNotFound`] without touching any state.
    pub async fn update_task(
        &mut self,
        task_id: &str,
        patch: UpdateDomainTaskModel,
        list_id: &str,
    ) -> Result<(), SyncError> {
        let Some(task) = self.store.task(list_id, task_id) else {
            warn!("Task {task_id} not found in list {list_id}");
            return Err(SyncError::TaskNotFound {
                task_id: task_id.to_string(),
                list_id: list_id.to_string(),
            });
        };
        let model = UpdateTaskModel::merged(task, &patch);

        match self.api.update_task(list_id, task_id, &model).await {
            Ok(envelope) if envelope.is_success() => {
                self.store.dispatch(TasksCommand::UpdateTask {
                    task_id: task_id.to_string(),
                    patch,
                    list_id: list_id.to_string(),
                });
                Ok(())
            },
            Ok(envelope) => Err(handle_server_app_error(&envelope, &mut self.store)),
            Err(err) => Err(handle_server_network_error(&err, &mut self.store)),
        }
    }

    fn require_list(&self, list_id: &str) -> Result<(), SyncError> {
        if self.store.todolist(list_id).is_some() {
            return Ok(());
        }
        warn!("List {list_id} not found");
        Err(SyncError::ListNotFound {
            list_id: list_id.to_string(),
        })
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.store.dispatch(AppCommand::SetStatus(status));
    }

    fn set_entity_status(&mut self, id: &str, status: RequestStatus) {
        self.store.dispatch(TodolistsCommand::ChangeTodolistEntityStatus {
            id: id.to_string(),
            status,
        });
    }

    fn malformed(&mut self, what: &str) -> SyncError {
        handle_server_network_error(&TransportError::Malformed(what.to_string()), &mut self.store)
    }
}
