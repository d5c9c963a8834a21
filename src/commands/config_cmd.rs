//! Config command - show and edit the client configuration

use std::path::Path;

use todosync::config::ClientConfig;
use todosync::output::{OperationResult, OutputMode};

use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(
    action: ConfigAction,
    mut config: ClientConfig,
    path: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let mut shown = config;
            if shown.api.api_key.is_some() {
                shown.api.api_key = Some("<set>".to_string());
            }
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                println!("# {}", path.display());
                print!("{}", toml::to_string_pretty(&shown)?);
            }
            return Ok(());
        },
        ConfigAction::SetKey { key } => {
            config.api.api_key = Some(key);
            config.save_to(path)?;
        },
        ConfigAction::SetUrl { url } => {
            config.api.base_url = url;
            config.save_to(path)?;
        },
    }

    OperationResult {
        success: true,
        message: format!("Saved {}", path.display()),
    }
    .render(mode);
    Ok(())
}
