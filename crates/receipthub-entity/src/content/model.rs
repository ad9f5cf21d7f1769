//! Content store entity model.
//!
//! Each row describes one object held by a storage provider; the object
//! itself is addressed by `external_key` within the provider's container.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata record for an uploaded receipt file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStoreRow {
    /// Unique content identifier.
    pub id: Uuid,
    /// The upload source (e.g. which client or ingest path produced it).
    pub source_id: Uuid,
    /// Provider-relative object key.
    pub external_key: String,
    /// MIME type of the stored object.
    pub mime_type: String,
    /// Object size in bytes, once verified.
    pub size_bytes: Option<i64>,
    /// SHA-256 checksum (hex) of the object contents.
    pub checksum: Option<String>,
    /// Free-form metadata captured at upload time.
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    /// Soft-delete flag.
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for registering a newly uploaded object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStoreInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub source_id: Uuid,
    pub external_key: String,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
}

/// Partial update of a content record, keyed by the mandatory identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStoreUpdate {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
