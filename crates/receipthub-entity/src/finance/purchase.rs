//! Purchase (expense line) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single expense line, optionally tied to a captured receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRow {
    /// Unique purchase identifier.
    pub id: i64,
    /// Expense type reference, or `None` with `other_category` filled in.
    pub expense_type_id: Option<i64>,
    /// Free-text category when no expense type applies.
    pub other_category: Option<String>,
    /// Currency reference.
    pub currency_id: Option<i64>,
    /// The submitting user.
    pub user_id: Option<Uuid>,
    /// Amount in the referenced currency.
    pub amount: f64,
    /// Client-side capture timestamp, stored verbatim.
    pub captured_timestamp: String,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Whether the expense is reimbursable to the employee.
    pub reimbursable: bool,
    /// The receipt backing this purchase, if any.
    pub receipt_id: Option<i64>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PurchaseRow {
    /// Check whether this purchase has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Payload for submitting a new purchase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub amount: f64,
    pub captured_timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    pub reimbursable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update of a purchase, keyed by the mandatory identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reimbursable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<i64>,
}
