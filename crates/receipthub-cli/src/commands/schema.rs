//! Schema registry and synchronizer CLI commands.

use std::path::Path;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use receipthub_core::error::AppError;
use receipthub_schema::{CompiledShape, registrations, sync_schemas};

/// Arguments for schema commands
#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Schema subcommand
    #[command(subcommand)]
    pub command: SchemaCommand,
}

/// Schema subcommands
#[derive(Debug, Subcommand)]
pub enum SchemaCommand {
    /// Write every registered shape as a JSON Schema interchange file
    Sync {
        /// Override the configured output directory
        #[arg(short, long)]
        output_dir: Option<String>,
    },
    /// List all registered shapes
    List,
    /// Validate a JSON document against a registered shape
    Validate {
        /// Shape name (e.g. ReceiptInsert)
        name: String,
        /// Path to the JSON document
        file: String,
    },
}

/// Registration display row
#[derive(Debug, Serialize, Tabled)]
struct RegistrationRow {
    /// Shape name
    name: String,
    /// Entity the shape derives from
    entity: String,
    /// Row / Insert / Update
    variant: String,
    /// Field count
    fields: usize,
}

/// Execute schema commands
pub async fn execute(
    args: &SchemaArgs,
    config_path: &Option<String>,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        SchemaCommand::Sync { output_dir } => {
            let config = super::load_config(config_path, env)?;
            let dir = output_dir
                .clone()
                .unwrap_or(config.schema_sync.output_dir);

            let report = sync_schemas(&registrations(), Path::new(&dir))?;

            for written in &report.written {
                println!("Wrote schema for {} to {}", written.name, written.path.display());
            }
            for skipped in &report.skipped {
                output::print_warning(&format!(
                    "Skipped {}: {}",
                    skipped.name, skipped.reason
                ));
            }
            output::print_success(&format!(
                "{} schema file(s) written to '{}'",
                report.written.len(),
                dir
            ));

            if !report.is_clean() {
                return Err(AppError::conversion(format!(
                    "{} shape(s) failed conversion",
                    report.skipped.len()
                )));
            }
            Ok(())
        }
        SchemaCommand::List => {
            let rows: Vec<RegistrationRow> = registrations()
                .iter()
                .map(|r| RegistrationRow {
                    name: r.name.clone(),
                    entity: r.entity.name.to_string(),
                    variant: format!("{:?}", r.shape.variant),
                    fields: r.shape.fields.len(),
                })
                .collect();
            output::print_list(&rows, format);
            Ok(())
        }
        SchemaCommand::Validate { name, file } => {
            let compiled = CompiledShape::for_name(name)?;
            let raw = tokio::fs::read_to_string(file)
                .await
                .map_err(|e| AppError::storage(format!("Failed to read '{}': {}", file, e)))?;
            let value: serde_json::Value = serde_json::from_str(&raw)?;

            match compiled.validate(&value) {
                Ok(()) => {
                    output::print_success(&format!("'{}' conforms to {}", file, name));
                    Ok(())
                }
                Err(e) => {
                    output::print_error(&format!("'{}' does not conform to {}", file, name));
                    Err(e)
                }
            }
        }
    }
}
