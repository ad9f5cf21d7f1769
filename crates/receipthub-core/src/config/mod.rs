//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod storage;
pub mod sync;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::storage::StorageConfig;
use self::sync::SchemaSyncConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Receipt file storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Schema synchronizer settings.
    #[serde(default)]
    pub schema_sync: SchemaSyncConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `RECEIPTHUB`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("RECEIPTHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from an explicit TOML file path.
    ///
    /// Used by the CLI where the operator points at a specific file.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(
                config::Environment::with_prefix("RECEIPTHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            schema_sync: SchemaSyncConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_usable() {
        let config = AppConfig::default();
        assert_eq!(config.storage.default_provider, "local");
        assert_eq!(config.schema_sync.output_dir, "schemas/interchange");
    }

    #[test]
    fn test_env_overlay_loader_applies_environment_variables() {
        unsafe { std::env::set_var("RECEIPTHUB__STORAGE__MAX_RETRIES", "7") };
        let config = AppConfig::load("no-such-environment").unwrap();
        unsafe { std::env::remove_var("RECEIPTHUB__STORAGE__MAX_RETRIES") };

        assert_eq!(config.storage.max_retries, 7);
        // Everything not overridden falls back to serde defaults.
        assert_eq!(config.storage.default_provider, "local");
    }
}
