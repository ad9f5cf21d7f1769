//! Schema synchronizer configuration.

use serde::{Deserialize, Serialize};

/// Settings for the schema-to-interchange synchronizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSyncConfig {
    /// Directory where interchange schema files are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for SchemaSyncConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "schemas/interchange".to_string()
}
