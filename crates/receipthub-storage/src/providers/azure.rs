//! Azure Blob storage provider.
//!
//! Talks to the Blob service REST API directly with a pre-issued SAS
//! token; the token is read from the environment, never from config
//! files. Container names may carry an `{env}` placeholder substituted
//! with the deployment environment name.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use tracing::debug;

use receipthub_core::config::storage::AzureBlobConfig;
use receipthub_core::error::{AppError, ErrorKind};
use receipthub_core::result::AppResult;
use receipthub_core::traits::storage::{ObjectMeta, ObjectStoreProvider};

/// Blob service API version sent with every request.
const API_VERSION: &str = "2021-08-06";

/// Azure Blob storage provider.
#[derive(Clone)]
pub struct AzureBlobProvider {
    account: String,
    container: String,
    sas_token: String,
    client: reqwest::Client,
}

// Manual impl: the SAS token grants access to the whole container and
// must never reach log output.
impl std::fmt::Debug for AzureBlobProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureBlobProvider")
            .field("account", &self.account)
            .field("container", &self.container)
            .field("sas_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl AzureBlobProvider {
    /// Create a provider from configuration, resolving the container
    /// template and reading the SAS token from the environment.
    pub fn from_config(config: &AzureBlobConfig, env: &str) -> AppResult<Self> {
        if config.account.is_empty() {
            return Err(AppError::configuration(
                "Azure Blob provider enabled but no account configured",
            ));
        }
        let sas_token = std::env::var(&config.sas_token_env).map_err(|_| {
            AppError::configuration(format!(
                "Missing SAS token environment variable: {}",
                config.sas_token_env
            ))
        })?;
        Ok(Self::new(
            &config.account,
            &resolve_container(&config.container, env),
            &sas_token,
        ))
    }

    /// Create a provider from explicit parts.
    pub fn new(account: &str, container: &str, sas_token: &str) -> Self {
        Self {
            account: account.to_string(),
            container: container.to_string(),
            sas_token: sas_token.trim_start_matches('?').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Full URL for a blob, SAS token appended.
    fn blob_url(&self, path: &str) -> String {
        format!(
            "https://{}.blob.core.windows.net/{}/{}?{}",
            self.account,
            self.container,
            path.trim_start_matches('/'),
            self.sas_token
        )
    }

    /// Container URL for health checks.
    fn container_url(&self) -> String {
        format!(
            "https://{}.blob.core.windows.net/{}?restype=container&{}",
            self.account, self.container, self.sas_token
        )
    }

    fn request_error(&self, op: &str, path: &str, err: reqwest::Error) -> AppError {
        AppError::with_source(
            ErrorKind::ExternalService,
            format!("Azure Blob {op} failed for '{path}'"),
            err,
        )
    }

    fn status_error(&self, op: &str, path: &str, status: StatusCode) -> AppError {
        AppError::new(
            ErrorKind::ExternalService,
            format!("Azure Blob {op} for '{path}' returned {status}"),
        )
    }
}

#[async_trait]
impl ObjectStoreProvider for AzureBlobProvider {
    fn provider_key(&self) -> &str {
        "azure_blob"
    }

    fn location_scheme(&self) -> &str {
        "azure"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let response = self
            .client
            .head(self.container_url())
            .header("x-ms-version", API_VERSION)
            .send()
            .await
            .map_err(|e| self.request_error("health check", "", e))?;
        Ok(response.status().is_success())
    }

    async fn upload(&self, path: &str, data: Bytes) -> AppResult<String> {
        let response = self
            .client
            .put(self.blob_url(path))
            .header("x-ms-version", API_VERSION)
            .header("x-ms-blob-type", "BlockBlob")
            .header("Content-Length", data.len())
            .body(data.clone())
            .send()
            .await
            .map_err(|e| self.request_error("upload", path, e))?;

        if response.status() != StatusCode::CREATED {
            return Err(self.status_error("upload", path, response.status()));
        }

        debug!(path, bytes = data.len(), container = %self.container, "Uploaded blob");
        Ok(format!(
            "azure://{}/{}",
            self.container,
            path.trim_start_matches('/')
        ))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let response = self
            .client
            .delete(self.blob_url(path))
            .header("x-ms-version", API_VERSION)
            .send()
            .await
            .map_err(|e| self.request_error("delete", path, e))?;

        // A missing blob is fine: delete is idempotent.
        if response.status() == StatusCode::NOT_FOUND || response.status().is_success() {
            return Ok(());
        }
        Err(self.status_error("delete", path, response.status()))
    }

    async fn exists(&self, path: &str) -> AppResult<Option<ObjectMeta>> {
        let response = self
            .client
            .head(self.blob_url(path))
            .header("x-ms-version", API_VERSION)
            .send()
            .await
            .map_err(|e| self.request_error("head", path, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(self.status_error("head", path, response.status()));
        }

        let size_bytes = response.content_length().unwrap_or(0);
        let last_modified = response
            .headers()
            .get(reqwest::header::LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
            .map(|t| t.with_timezone(&Utc));

        Ok(Some(ObjectMeta {
            path: path.to_string(),
            size_bytes,
            last_modified,
        }))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let response = self
            .client
            .get(self.blob_url(path))
            .header("x-ms-version", API_VERSION)
            .send()
            .await
            .map_err(|e| self.request_error("download", path, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Blob not found: {path}")));
        }
        if !response.status().is_success() {
            return Err(self.status_error("download", path, response.status()));
        }

        response
            .bytes()
            .await
            .map_err(|e| self.request_error("download", path, e))
    }
}

/// Substitute the `{env}` placeholder in a container name template.
pub fn resolve_container(template: &str, env: &str) -> String {
    template.replace("{env}", env)
}
