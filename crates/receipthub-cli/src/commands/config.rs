//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use receipthub_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &Option<String>,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let source = super::describe_config_source(config_path, env);
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path, env)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path, env) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", source));
                println!("  Storage default: {}", config.storage.default_provider);
                println!("  Schema output:   {}", config.schema_sync.output_dir);
                println!("  Log level:       {}", config.logging.level);
                if config.storage.azure.enabled {
                    println!("  Azure container: {}", config.storage.azure.container);
                }
                if config.storage.s3.enabled {
                    println!("  S3 bucket:       {}", config.storage.s3.bucket);
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
