//! Centralized path definitions for todosync
//!
//! todosync keeps no list or task state on disk; the only file it owns is the
//! user-level configuration.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/todosync/
//! └── config.toml               # API endpoint, API key, UI preferences
//! ```
//!
//! On platforms without an XDG-style config directory the home directory is
//! used instead (`~/.todosync/`).

use std::path::PathBuf;

/// Config directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "todosync";

/// Fallback directory name under the home dir
const HOME_DIR_NAME: &str = ".todosync";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the global todosync config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR_NAME),
        |dir| dir.join(CONFIG_DIR_NAME),
    )
}

/// Get the global config file path.
///
/// Returns `~/.config/todosync/config.toml` on Linux.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
