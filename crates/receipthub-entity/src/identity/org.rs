//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant organization. Organizations are never physically deleted;
/// `deleted_at` marks a soft delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgRow {
    /// Unique organization identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL-safe unique slug.
    pub slug: String,
    /// Free-form per-organization settings.
    pub settings: serde_json::Map<String, serde_json::Value>,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    /// The user who created this organization.
    pub created_by: Option<Uuid>,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
    /// The user who last updated this organization.
    pub updated_by: Option<Uuid>,
    /// When the organization was last updated.
    pub updated_at: DateTime<Utc>,
}

impl OrgRow {
    /// Check whether this organization has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Payload for creating a new organization. Server-assigned fields are
/// optional and filled in by the persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update of an organization, keyed by the mandatory identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgUpdate {
    /// The organization to update. Identifiers are immutable.
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}
