//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use todosync::config::ClientConfig;
use todosync::core::models::{FilterValue, TaskPriority, TaskStatus};
use todosync::output::OutputMode;

/// todosync - to-do lists kept in sync with a remote API
#[derive(Parser, Debug)]
#[command(
    name = "todosync",
    version,
    about = "To-do lists kept in sync with a remote API",
    long_about = "Manage to-do lists and their tasks on a todo-lists server.\n\n\
                  Every command loads the current state from the server, applies one\n\
                  change, and prints the resulting state with the request status."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether the configured session is authenticated
    Whoami,

    /// Show all lists
    Lists,

    /// Manage lists (add, rm, rename)
    List {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Show the tasks of a list
    Tasks {
        /// List ID
        list_id: String,

        /// Which tasks to show: all, active, completed
        #[arg(short, long)]
        filter: Option<FilterValue>,
    },

    /// Manage tasks (add, rm, update)
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

/// List subcommands
#[derive(Subcommand, Debug)]
pub enum ListAction {
    /// Create a list
    Add {
        /// List title
        title: String,
    },

    /// Delete a list and its tasks
    #[command(alias = "remove")]
    Rm {
        /// List ID
        id: String,
    },

    /// Rename a list
    Rename {
        /// List ID
        id: String,

        /// New title
        title: String,
    },
}

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Create a task
    Add {
        /// List ID
        list_id: String,

        /// Task title (what needs to be done)
        title: String,
    },

    /// Delete a task
    #[command(alias = "remove")]
    Rm {
        /// List ID
        list_id: String,

        /// Task ID
        task_id: String,
    },

    /// Change fields of a task; fields not given stay as they are
    Update {
        /// List ID
        list_id: String,

        /// Task ID
        task_id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New status: new, in_progress, completed, draft
        #[arg(short, long)]
        status: Option<TaskStatus>,

        /// New priority: low, middle, hi, urgently, later
        #[arg(short, long)]
        priority: Option<TaskPriority>,

        /// New start date
        #[arg(long)]
        start_date: Option<String>,

        /// New deadline
        #[arg(long)]
        deadline: Option<String>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Store the API key
    SetKey {
        /// API key sent in the API-KEY header
        key: String,
    },

    /// Store the API base URL
    SetUrl {
        /// Base URL of the todo-lists API
        url: String,
    },
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(ClientConfig::config_path);
    let config = ClientConfig::load_from(&config_path)?.with_env_overrides();

    match cli.command {
        Some(Command::Whoami) => commands::whoami(&config, output_mode).await,
        Some(Command::Lists) => commands::lists(&config, output_mode).await,
        Some(Command::List { action }) => commands::list_cmd(action, &config, output_mode).await,
        Some(Command::Tasks { list_id, filter }) => {
            let filter = filter.unwrap_or(config.ui.filter);
            commands::tasks(&list_id, filter, &config, output_mode).await
        },
        Some(Command::Task { action }) => commands::task_cmd(action, &config, output_mode).await,
        Some(Command::Config { action }) => {
            commands::config_cmd(action, config, &config_path, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("todosync v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("todosync v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'todosync --help' for usage");
                println!("Run 'todosync config set-key <key>' to get started");
            }
            Ok(())
        },
    }
}
