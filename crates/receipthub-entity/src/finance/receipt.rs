//! Receipt entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A captured receipt. The scanned file itself lives in object storage
/// and is referenced through `content_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRow {
    /// Unique receipt identifier.
    pub id: i64,
    /// The organization this receipt belongs to.
    pub org_id: Uuid,
    /// Supplier name as captured.
    pub supplier: Option<String>,
    /// Reference into the content store for the scanned file.
    pub content_id: Option<Uuid>,
    /// Soft-delete flag.
    pub is_active: Option<bool>,
    /// Date printed on the receipt.
    pub receipt_date: NaiveDate,
    pub created_by: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReceiptRow {
    /// Check whether this receipt is active. Rows predating the
    /// `is_active` column are treated as active.
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    /// Check whether a scanned file is attached.
    pub fn has_attachment(&self) -> bool {
        self.content_id.is_some()
    }
}

/// Payload for capturing a new receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Assigned server-side from the caller's active organization when
    /// omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update of a receipt, keyed by the mandatory identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<NaiveDate>,
}
