//! Organization membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A membership linking a user to an organization. Foreign-key semantics
/// are enforced by the backing store, not by this code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMemberRow {
    /// Unique membership identifier.
    pub id: i64,
    /// The organization this membership belongs to.
    pub org_id: Uuid,
    /// The member's user identifier.
    pub user_id: Uuid,
    /// Whether this member owns the organization.
    pub is_owner: bool,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl OrgMemberRow {
    /// Check whether this membership has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Payload for creating a new membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMemberInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub org_id: Uuid,
    pub user_id: Uuid,
    /// Defaults to `false` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
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

/// Partial update of a membership, keyed by the mandatory identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMemberUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}
