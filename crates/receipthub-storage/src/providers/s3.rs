//! S3-compatible object storage provider (requires the `s3` feature).

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::debug;

use receipthub_core::config::storage::S3StorageConfig;
use receipthub_core::error::{AppError, ErrorKind};
use receipthub_core::result::AppResult;
use receipthub_core::traits::storage::{ObjectMeta, ObjectStoreProvider};

/// S3-compatible storage provider.
#[derive(Debug, Clone)]
pub struct S3StorageProvider {
    bucket: String,
    client: aws_sdk_s3::Client,
}

impl S3StorageProvider {
    /// Create a new S3 storage provider. Credentials come from the
    /// standard AWS environment/profile chain.
    pub async fn from_config(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration(
                "S3 provider enabled but no bucket configured",
            ));
        }

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if !config.endpoint.is_empty() {
            loader = loader.endpoint_url(&config.endpoint);
        }
        let shared = loader.load().await;

        Ok(Self {
            bucket: config.bucket.clone(),
            client: aws_sdk_s3::Client::new(&shared),
        })
    }

    fn service_error(&self, op: &str, path: &str, err: impl std::fmt::Display) -> AppError {
        AppError::new(
            ErrorKind::ExternalService,
            format!("S3 {op} failed for '{path}': {err}"),
        )
    }
}

#[async_trait]
impl ObjectStoreProvider for S3StorageProvider {
    fn provider_key(&self) -> &str {
        "s3"
    }

    fn location_scheme(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let result = self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await;
        Ok(result.is_ok())
    }

    async fn upload(&self, path: &str, data: Bytes) -> AppResult<String> {
        let key = path.trim_start_matches('/').to_string();
        let len = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| self.service_error("upload", path, aws_sdk_s3::error::DisplayErrorContext(e)))?;

        debug!(path, bytes = len, bucket = %self.bucket, "Uploaded object");
        Ok(format!("s3://{}/{key}", self.bucket))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        // DeleteObject succeeds for missing keys, so this is idempotent
        // without a prior existence check.
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(path.trim_start_matches('/'))
            .send()
            .await
            .map_err(|e| self.service_error("delete", path, aws_sdk_s3::error::DisplayErrorContext(e)))?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<Option<ObjectMeta>> {
        let result = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(path.trim_start_matches('/'))
            .send()
            .await;

        match result {
            Ok(head) => Ok(Some(ObjectMeta {
                path: path.to_string(),
                size_bytes: head.content_length().unwrap_or(0).max(0) as u64,
                last_modified: head
                    .last_modified()
                    .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), 0)),
            })),
            Err(err) => {
                if err
                    .as_service_error()
                    .map(|e| e.is_not_found())
                    .unwrap_or(false)
                {
                    Ok(None)
                } else {
                    Err(self.service_error("head", path, aws_sdk_s3::error::DisplayErrorContext(err)))
                }
            }
        }
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(path.trim_start_matches('/'))
            .send()
            .await
            .map_err(|e| self.service_error("download", path, aws_sdk_s3::error::DisplayErrorContext(e)))?;

        let data = result
            .body
            .collect()
            .await
            .map_err(|e| self.service_error("download", path, e))?;
        Ok(data.into_bytes())
    }
}
