//! List commands - show, add, remove and rename lists

use todosync::config::ClientConfig;
use todosync::output::{ListsResult, OutputMode};

use super::connect;
use crate::cli::ListAction;

/// Show all lists
pub async fn lists(config: &ClientConfig, mode: OutputMode) -> anyhow::Result<()> {
    let mut sync = connect(config)?;
    let fetched = sync.fetch_todolists().await;

    ListsResult::from_store(sync.store()).render(mode);
    fetched?;
    Ok(())
}

/// Handle list subcommands
pub async fn list_cmd(
    action: ListAction,
    config: &ClientConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut sync = connect(config)?;
    sync.fetch_todolists().await?;

    let outcome = match action {
        ListAction::Add { title } => sync.add_todolist(&title).await.map(|_| ()),
        ListAction::Rm { id } => {
            if sync.store().todolist(&id).is_none() {
                anyhow::bail!("List not found: {id}");
            }
            sync.remove_todolist(&id).await
        },
        ListAction::Rename { id, title } => sync.change_todolist_title(&id, &title).await,
    };

    ListsResult::from_store(sync.store()).render(mode);
    outcome?;
    Ok(())
}
