//! Object store provider trait for pluggable receipt-file backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ObjectMeta {
    /// Path within the storage provider.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modified timestamp (if the backend reports one).
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// Trait for receipt-file object storage backends.
///
/// Implementations exist for the local filesystem, Azure Blob storage,
/// and S3-compatible object stores. The trait is defined here in
/// `receipthub-core` and implemented in `receipthub-storage`.
///
/// Contract notes:
/// - [`upload`](Self::upload) resolves to a location identifier of the form
///   `"<scheme>://<container-or-root>/<path>"`.
/// - [`delete`](Self::delete) is idempotent: deleting an object that does
///   not exist succeeds.
#[async_trait]
pub trait ObjectStoreProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider key this implementation registers under
    /// (e.g. `"local"`, `"azure_blob"`).
    fn provider_key(&self) -> &str;

    /// Return the URI scheme used in location identifiers (e.g. `"azure"`).
    fn location_scheme(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Upload bytes to the given destination path and return the location
    /// identifier of the stored object.
    async fn upload(&self, path: &str, data: Bytes) -> AppResult<String>;

    /// Delete the object at the given path. Succeeds if the object is
    /// already gone.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether an object exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<Option<ObjectMeta>>;

    /// Read an object into memory as a complete byte vector.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;
}
