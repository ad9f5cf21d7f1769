//! Local filesystem storage provider.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use receipthub_core::error::{AppError, ErrorKind};
use receipthub_core::result::AppResult;
use receipthub_core::traits::storage::{ObjectMeta, ObjectStoreProvider};

/// Local filesystem storage provider, used in development and tests.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored objects.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a relative object key to a path within the root.
    ///
    /// Keys reach this provider from operator input, so anything that
    /// could step outside the root (`..`, current-dir markers, absolute
    /// segments) is rejected.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let clean = path.trim_start_matches('/');
        let relative = Path::new(clean);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::validation(format!(
                "Object key may not contain path traversal components: {path}"
            )));
        }
        Ok(self.root.join(relative))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStoreProvider for LocalStorageProvider {
    fn provider_key(&self) -> &str {
        "local"
    }

    fn location_scheme(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn upload(&self, path: &str, data: Bytes) -> AppResult<String> {
        let full_path = self.resolve(path)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write object: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Stored object");
        Ok(format!("local://{}", path.trim_start_matches('/')))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        if full_path.exists() {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object: {path}"),
                    e,
                )
            })?;
        }
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<Option<ObjectMeta>> {
        let full_path = self.resolve(path)?;
        let meta = match fs::metadata(&full_path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to stat object: {path}"),
                    e,
                ));
            }
        };

        let last_modified = meta
            .modified()
            .ok()
            .map(chrono::DateTime::<chrono::Utc>::from);

        Ok(Some(ObjectMeta {
            path: path.to_string(),
            size_bytes: meta.len(),
            last_modified,
        }))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read object: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_read_delete() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let data = Bytes::from("scanned receipt");
        let location = provider
            .upload("orgs/acme/receipts/1/file.pdf", data.clone())
            .await
            .unwrap();
        assert_eq!(location, "local://orgs/acme/receipts/1/file.pdf");

        let meta = provider
            .exists("orgs/acme/receipts/1/file.pdf")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(meta.size_bytes, data.len() as u64);

        let read_back = provider
            .read_bytes("orgs/acme/receipts/1/file.pdf")
            .await
            .unwrap();
        assert_eq!(read_back, data);

        provider.delete("orgs/acme/receipts/1/file.pdf").await.unwrap();
        assert!(provider
            .exists("orgs/acme/receipts/1/file.pdf")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        provider.delete("never/existed.pdf").await.unwrap();
        provider.delete("never/existed.pdf").await.unwrap();
    }

    #[tokio::test]
    async fn test_traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let err = provider
            .upload("../outside.pdf", Bytes::from("x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = provider.read_bytes("a/../../b.pdf").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = provider.delete("./c.pdf").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_read_missing_object_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let err = provider.read_bytes("missing.pdf").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
