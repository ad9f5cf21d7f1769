//! Storage provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Default storage provider key to use for uploads.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Maximum upload size in bytes (default 25 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Maximum number of retries for transient provider failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay in milliseconds for exponential backoff between retries.
    #[serde(default = "default_retry_base_delay")]
    pub retry_base_delay_ms: u64,
    /// Local filesystem storage configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// Azure Blob storage configuration.
    #[serde(default)]
    pub azure: AzureBlobConfig,
    /// S3-compatible storage configuration.
    #[serde(default)]
    pub s3: S3StorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            max_upload_size_bytes: default_max_upload(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay(),
            local: LocalStorageConfig::default(),
            azure: AzureBlobConfig::default(),
            s3: S3StorageConfig::default(),
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for local receipt file storage.
    #[serde(default = "default_local_root")]
    pub root_path: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
        }
    }
}

/// Azure Blob storage configuration.
///
/// The SAS token is read from the environment variable named by
/// `sas_token_env` rather than stored in the configuration file itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureBlobConfig {
    /// Whether the Azure Blob provider is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Azure storage account name.
    #[serde(default)]
    pub account: String,
    /// Blob container name. A `{env}` placeholder is substituted with the
    /// deployment environment name.
    #[serde(default = "default_container")]
    pub container: String,
    /// Name of the environment variable holding the SAS token.
    #[serde(default = "default_sas_token_env")]
    pub sas_token_env: String,
}

impl Default for AzureBlobConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            account: String::new(),
            container: default_container(),
            sas_token_env: default_sas_token_env(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StorageConfig {
    /// Whether S3 storage is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// S3 endpoint URL (for non-AWS services like MinIO).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: String::new(),
            region: default_region(),
            bucket: String::new(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_max_upload() -> u64 {
    26_214_400 // 25 MB
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_base_delay() -> u64 {
    200
}

fn default_local_root() -> String {
    "./data/storage/receipts".to_string()
}

fn default_container() -> String {
    "receipts-{env}".to_string()
}

fn default_sas_token_env() -> String {
    "AZURE_STORAGE_SAS_TOKEN".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
