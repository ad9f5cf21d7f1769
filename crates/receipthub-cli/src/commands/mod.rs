//! CLI command definitions and dispatch.

pub mod config;
pub mod schema;
pub mod storage;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use receipthub_core::config::AppConfig;
use receipthub_core::error::AppError;

/// ReceiptHub — Receipt Capture and Expense Tracking
#[derive(Debug, Parser)]
#[command(name = "receipthub", version, about, long_about = None)]
pub struct Cli {
    /// Explicit configuration file. When omitted, config/default.toml is
    /// merged with the config/<env>.toml overlay.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Deployment environment name: selects the configuration overlay and
    /// is substituted into container templates
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Schema registry and synchronizer
    Schema(schema::SchemaArgs),
    /// Storage provider management
    Storage(storage::StorageArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Schema(args) => {
                schema::execute(args, &self.config, &self.env, self.format).await
            }
            Commands::Storage(args) => {
                storage::execute(args, &self.config, &self.env, self.format).await
            }
            Commands::Config(args) => {
                config::execute(args, &self.config, &self.env, self.format).await
            }
        }
    }
}

/// Helper: load configuration, preferring an explicit file over the
/// environment-overlay convention.
pub fn load_config(config_path: &Option<String>, env: &str) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => AppConfig::load_file(path),
        None => AppConfig::load(env),
    }
}

/// Helper: human-readable description of the configuration source.
pub fn describe_config_source(config_path: &Option<String>, env: &str) -> String {
    match config_path {
        Some(path) => path.clone(),
        None => format!("config/default.toml (+ config/{env}.toml overlay)"),
    }
}
