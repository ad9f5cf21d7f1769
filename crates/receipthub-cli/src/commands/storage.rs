//! Storage provider management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use receipthub_core::error::AppError;
use receipthub_storage::{AttachmentStore, ProviderRegistry};

/// Arguments for storage commands
#[derive(Debug, Args)]
pub struct StorageArgs {
    /// Storage subcommand
    #[command(subcommand)]
    pub command: StorageCommand,
}

/// Storage subcommands
#[derive(Debug, Subcommand)]
pub enum StorageCommand {
    /// Check connectivity of every configured provider
    Check,
    /// Upload a receipt attachment
    Put {
        /// Path to the file to upload
        file: String,
        /// Organization ID
        #[arg(long)]
        org: Uuid,
        /// Receipt ID
        #[arg(long)]
        receipt: i64,
        /// Upload source ID (generated when omitted)
        #[arg(long)]
        source: Option<Uuid>,
        /// Provider key (defaults to the configured default provider)
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// Remove a stored attachment by its object key
    Rm {
        /// Provider-relative object key
        key: String,
        /// Provider key (defaults to the configured default provider)
        #[arg(short, long)]
        provider: Option<String>,
    },
}

/// Provider health display row
#[derive(Debug, Serialize, Tabled)]
struct ProviderRow {
    /// Provider key
    provider: String,
    /// Health status
    status: String,
}

/// Execute storage commands
pub async fn execute(
    args: &StorageArgs,
    config_path: &Option<String>,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path, env)?;
    let registry = ProviderRegistry::from_config(&config.storage, env).await?;

    match &args.command {
        StorageCommand::Check => {
            let mut rows: Vec<ProviderRow> = registry
                .health_check_all()
                .await
                .into_iter()
                .map(|(provider, healthy)| ProviderRow {
                    provider,
                    status: if healthy { "ok" } else { "unreachable" }.to_string(),
                })
                .collect();
            rows.sort_by(|a, b| a.provider.cmp(&b.provider));

            let unhealthy = rows.iter().filter(|r| r.status != "ok").count();
            output::print_list(&rows, format);

            if unhealthy > 0 {
                return Err(AppError::storage(format!(
                    "{unhealthy} provider(s) unreachable"
                )));
            }
            Ok(())
        }
        StorageCommand::Put {
            file,
            org,
            receipt,
            source,
            provider,
        } => {
            let provider_key = provider
                .clone()
                .unwrap_or_else(|| config.storage.default_provider.clone());
            let data = tokio::fs::read(file)
                .await
                .map_err(|e| AppError::storage(format!("Failed to read '{}': {}", file, e)))?;
            let filename = std::path::Path::new(file)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("attachment");

            let store = AttachmentStore::new(registry, &config.storage);
            let stored = store
                .store(
                    &provider_key,
                    *org,
                    *receipt,
                    source.unwrap_or_else(Uuid::new_v4),
                    None,
                    filename,
                    data.into(),
                )
                .await?;

            output::print_success(&format!("Uploaded to {}", stored.location));
            output::print_item(&stored.content, format);
            Ok(())
        }
        StorageCommand::Rm { key, provider } => {
            let provider_key = provider
                .clone()
                .unwrap_or_else(|| config.storage.default_provider.clone());
            let store = AttachmentStore::new(registry, &config.storage);
            store.remove(&provider_key, key).await?;
            output::print_success(&format!("Removed '{}'", key));
            Ok(())
        }
    }
}
