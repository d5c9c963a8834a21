//! Task commands - show, add, remove and update tasks of a list

use todosync::adapters::HttpApi;
use todosync::config::ClientConfig;
use todosync::core::models::{FilterValue, UpdateDomainTaskModel};
use todosync::core::services::Synchronizer;
use todosync::output::{OutputMode, TasksResult};

use super::connect;
use crate::cli::TaskAction;

/// Show the tasks of a list through the given filter
pub async fn tasks(
    list_id: &str,
    filter: FilterValue,
    config: &ClientConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut sync = load_list(config, list_id).await?;
    sync.change_todolist_filter(list_id, filter);

    TasksResult::from_store(sync.store(), list_id).render(mode);
    Ok(())
}

/// Handle task subcommands
pub async fn task_cmd(
    action: TaskAction,
    config: &ClientConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (list_id, outcome, mut sync) = match action {
        TaskAction::Add { list_id, title } => {
            let mut sync = load_list(config, &list_id).await?;
            let outcome = sync.add_task(&title, &list_id).await.map(|_| ());
            (list_id, outcome, sync)
        },
        TaskAction::Rm { list_id, task_id } => {
            let mut sync = load_list(config, &list_id).await?;
            let outcome = sync.remove_task(&task_id, &list_id).await;
            (list_id, outcome, sync)
        },
        TaskAction::Update {
            list_id,
            task_id,
            title,
            description,
            status,
            priority,
            start_date,
            deadline,
        } => {
            let patch = UpdateDomainTaskModel {
                title,
                description,
                status,
                priority,
                start_date,
                deadline,
            };
            if patch.is_empty() {
                anyhow::bail!("Nothing to update. Pass at least one of --title, --description, --status, --priority, --start-date, --deadline");
            }
            let mut sync = load_list(config, &list_id).await?;
            let outcome = sync.update_task(&task_id, patch, &list_id).await;
            (list_id, outcome, sync)
        },
    };

    sync.change_todolist_filter(&list_id, config.ui.filter);
    TasksResult::from_store(sync.store(), &list_id).render(mode);
    outcome?;
    Ok(())
}

/// Fetch the lists, then the tasks of `list_id`
async fn load_list(config: &ClientConfig, list_id: &str) -> anyhow::Result<Synchronizer<HttpApi>> {
    let mut sync = connect(config)?;
    sync.fetch_todolists().await?;
    if sync.store().todolist(list_id).is_none() {
        anyhow::bail!("List not found: {list_id}");
    }
    sync.fetch_tasks(list_id).await?;
    Ok(sync)
}
