//! Whoami command - run the startup identity check

use todosync::config::ClientConfig;
use todosync::output::{OutputMode, WhoamiResult};

use super::connect;

/// Report whether the configured session is authenticated
pub async fn whoami(config: &ClientConfig, mode: OutputMode) -> anyhow::Result<()> {
    let mut sync = connect(config)?;
    let logged_in = sync.initialize_app().await?;

    WhoamiResult {
        logged_in,
        initialized: sync.store().state().app.is_initialized,
        base_url: sync.api().base_url().to_string(),
    }
    .render(mode);
    Ok(())
}
