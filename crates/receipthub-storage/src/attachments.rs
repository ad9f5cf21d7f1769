//! Receipt attachment store.
//!
//! High-level upload/remove API over the provider registry: validates the
//! payload, computes a content-addressed object key, and retries transient
//! provider failures before giving up.

use bytes::Bytes;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use uuid::Uuid;

use receipthub_core::config::storage::StorageConfig;
use receipthub_core::error::AppError;
use receipthub_core::result::AppResult;
use receipthub_entity::content::ContentStoreInsert;

use crate::registry::ProviderRegistry;
use crate::retry::{RetryPolicy, with_backoff};

/// Result of a stored attachment: the content-store payload to persist and
/// the provider location string for logging and diagnostics.
#[derive(Debug, Clone)]
pub struct StoredAttachment {
    pub content: ContentStoreInsert,
    /// Scheme-prefixed location, e.g. `local://orgs/.../receipt.pdf`.
    pub location: String,
}

/// Stores receipt attachments through a [`ProviderRegistry`].
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    registry: ProviderRegistry,
    max_upload_size_bytes: u64,
    retry: RetryPolicy,
}

impl AttachmentStore {
    pub fn new(registry: ProviderRegistry, config: &StorageConfig) -> Self {
        Self {
            registry,
            max_upload_size_bytes: config.max_upload_size_bytes,
            retry: RetryPolicy::new(config.max_retries, config.retry_base_delay_ms),
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Upload an attachment for a receipt and build its content record.
    ///
    /// The object key is content-addressed: re-uploading identical bytes
    /// for the same receipt writes to the same key, so the operation is
    /// safe to repeat.
    pub async fn store(
        &self,
        provider_key: &str,
        org_id: Uuid,
        receipt_id: i64,
        source_id: Uuid,
        created_by: Option<Uuid>,
        filename: &str,
        data: Bytes,
    ) -> AppResult<StoredAttachment> {
        if data.is_empty() {
            return Err(AppError::validation("Attachment is empty"));
        }
        if data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Attachment exceeds the maximum upload size of {} bytes",
                self.max_upload_size_bytes
            )));
        }

        let checksum = hex_sha256(&data);
        let safe_name = sanitize_filename(filename);
        let key = format!(
            "orgs/{org_id}/receipts/{receipt_id}/{}-{safe_name}",
            &checksum[..16]
        );

        let provider = self.registry.get(provider_key).await?;
        debug!(provider = provider_key, key = %key, size = data.len(), "Uploading attachment");

        let location = with_backoff(self.retry, "upload", || {
            let provider = provider.clone();
            let key = key.clone();
            let data = data.clone();
            async move { provider.upload(&key, data).await }
        })
        .await?;

        info!(provider = provider_key, location = %location, "Attachment stored");

        let content = ContentStoreInsert {
            id: None,
            source_id,
            external_key: key,
            mime_type: mime_from_name(filename).to_string(),
            size_bytes: Some(data.len() as i64),
            checksum: Some(checksum),
            metadata: None,
            is_active: None,
            created_by,
        };
        Ok(StoredAttachment { content, location })
    }

    /// Remove a stored attachment. Removing an object that is already gone
    /// succeeds.
    pub async fn remove(&self, provider_key: &str, external_key: &str) -> AppResult<()> {
        let provider = self.registry.get(provider_key).await?;
        with_backoff(self.retry, "delete", || {
            let provider = provider.clone();
            let key = external_key.to_string();
            async move { provider.delete(&key).await }
        })
        .await?;
        info!(provider = provider_key, key = external_key, "Attachment removed");
        Ok(())
    }
}

fn hex_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Keep object keys provider-safe: alphanumerics, dot, dash and underscore
/// pass through, everything else becomes an underscore.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('_').is_empty() {
        "attachment".to_string()
    } else {
        cleaned
    }
}

/// MIME type from the file extension, for the formats receipts arrive in.
fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "heic" => "image/heic",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "gif" => "image/gif",
        "csv" => "text/csv",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::providers::LocalStorageProvider;

    async fn store_with_tempdir() -> (tempfile::TempDir, AttachmentStore) {
        let dir = tempfile::tempdir().unwrap();
        let registry = ProviderRegistry::new();
        let local = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        registry.register(Arc::new(local), true).await;
        let config = StorageConfig::default();
        (dir, AttachmentStore::new(registry, &config))
    }

    fn org() -> Uuid {
        Uuid::new_v4()
    }

    #[tokio::test]
    async fn test_store_builds_content_record() {
        let (_dir, store) = store_with_tempdir().await;
        let stored = store
            .store(
                "local",
                org(),
                42,
                org(),
                None,
                "lunch receipt.pdf",
                Bytes::from("pdf bytes"),
            )
            .await
            .unwrap();

        assert!(stored.location.starts_with("local://"));
        assert_eq!(stored.content.mime_type, "application/pdf");
        assert_eq!(stored.content.size_bytes, Some(9));
        assert!(stored.content.external_key.contains("/receipts/42/"));
        assert!(stored.content.external_key.ends_with("lunch_receipt.pdf"));
        let checksum = stored.content.checksum.unwrap();
        assert_eq!(checksum.len(), 64);
        assert!(stored.content.external_key.contains(&checksum[..16]));
    }

    #[tokio::test]
    async fn test_store_is_repeatable_for_identical_bytes() {
        let (_dir, store) = store_with_tempdir().await;
        let org_id = org();
        let source = org();
        let a = store
            .store("local", org_id, 7, source, None, "r.png", Bytes::from("img"))
            .await
            .unwrap();
        let b = store
            .store("local", org_id, 7, source, None, "r.png", Bytes::from("img"))
            .await
            .unwrap();
        assert_eq!(a.content.external_key, b.content.external_key);
        assert_eq!(a.location, b.location);
    }

    #[tokio::test]
    async fn test_oversized_and_empty_payloads_are_rejected() {
        let (_dir, store) = store_with_tempdir().await;
        let err = store
            .store("local", org(), 1, org(), None, "r.pdf", Bytes::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind, receipthub_core::error::ErrorKind::Validation);

        let registry = store.registry().clone();
        let mut config = StorageConfig::default();
        config.max_upload_size_bytes = 4;
        let small = AttachmentStore::new(registry, &config);
        let err = small
            .store("local", org(), 1, org(), None, "r.pdf", Bytes::from("12345"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, receipthub_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (_dir, store) = store_with_tempdir().await;
        let stored = store
            .store("local", org(), 3, org(), None, "r.txt", Bytes::from("t"))
            .await
            .unwrap();
        store
            .remove("local", &stored.content.external_key)
            .await
            .unwrap();
        // second removal of the same key still succeeds
        store
            .remove("local", &stored.content.external_key)
            .await
            .unwrap();
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("a b/c?.pdf"), "c_.pdf");
        assert_eq!(sanitize_filename("///"), "attachment");
        assert_eq!(sanitize_filename("ok-name_1.jpeg"), "ok-name_1.jpeg");
    }

    #[test]
    fn test_mime_lookup() {
        assert_eq!(mime_from_name("x.PDF"), "application/pdf");
        assert_eq!(mime_from_name("x.jpeg"), "image/jpeg");
        assert_eq!(mime_from_name("unknown.bin"), "application/octet-stream");
    }
}
