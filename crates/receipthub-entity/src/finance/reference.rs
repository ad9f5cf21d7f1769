//! Finance reference data: currencies, expense types, and categories.
//!
//! Reference tables are maintained by finance admins through the backing
//! store; client code only reads them, so only row shapes are typed here.
//! They predate the unified audit-column convention and keep their legacy
//! `created_user_id`/`modified_user_id` column names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A currency purchases can be denominated in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Display symbol, e.g. `"€"`.
    pub symbol: Option<String>,
    pub created_user_id: Option<String>,
    pub modified_user_id: Option<String>,
    pub is_active: Option<bool>,
    pub created_timestamp: Option<DateTime<Utc>>,
    pub modified_timestamp: Option<DateTime<Utc>>,
}

/// An expense type, grouped under an expense category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseTypeRow {
    pub id: i64,
    pub expense_category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub created_user_id: Option<String>,
    pub modified_user_id: Option<String>,
    pub is_active: Option<bool>,
    pub created_timestamp: Option<DateTime<Utc>>,
    pub modified_timestamp: Option<DateTime<Utc>>,
}

/// A top-level expense category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategoryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_user_id: Option<String>,
    pub modified_user_id: Option<String>,
    pub is_active: Option<bool>,
    pub created_timestamp: Option<DateTime<Utc>>,
    pub modified_timestamp: Option<DateTime<Utc>>,
}
