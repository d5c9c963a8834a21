//! Command implementations

mod config_cmd;
mod lists;
mod tasks;
mod whoami;

use todosync::adapters::HttpApi;
use todosync::config::ClientConfig;
use todosync::core::services::Synchronizer;

pub use config_cmd::config_cmd;
pub use lists::{list_cmd, lists};
pub use tasks::{task_cmd, tasks};
pub use whoami::whoami;

/// Coordinators bound to the configured server
fn connect(config: &ClientConfig) -> anyhow::Result<Synchronizer<HttpApi>> {
    let api = HttpApi::from_config(&config.api)?;
    Ok(Synchronizer::new(api))
}
