//! Application roles and role-assignment entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Roles available in the RBAC system.
///
/// Roles gate which screens and mutations a user may perform:
/// admins manage everything, finance admins review and approve
/// expenses, employees submit receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    /// Full administrator.
    Admin,
    /// Can review, approve, and reject submitted expenses.
    FinanceAdmin,
    /// Can capture receipts and submit expenses.
    Employee,
}

impl AppRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role may review submitted expenses.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Admin | Self::FinanceAdmin)
    }

    /// Return the role as its persisted lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::FinanceAdmin => "financeadmin",
            Self::Employee => "employee",
        }
    }

    /// All role variants in privilege order.
    pub fn all() -> [AppRole; 3] {
        [Self::Admin, Self::FinanceAdmin, Self::Employee]
    }
}

impl fmt::Display for AppRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppRole {
    type Err = receipthub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "financeadmin" => Ok(Self::FinanceAdmin),
            "employee" => Ok(Self::Employee),
            _ => Err(receipthub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, financeadmin, employee"
            ))),
        }
    }
}

/// A role granted to an organization membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRoleRow {
    /// Unique role-assignment identifier.
    pub id: i64,
    /// The membership this role is granted to.
    pub member_id: i64,
    /// The granted role.
    pub role: AppRole,
    /// Whether the grant is active (soft delete via deactivation).
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for granting a role to a membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRoleInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub member_id: i64,
    pub role: AppRole,
    /// Defaults to active when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update of a role grant, keyed by the mandatory identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRoleUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AppRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A global role granted directly to a user (legacy `user_roles` table;
/// read-only from clients, so only the row shape exists).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleRow {
    pub id: i64,
    pub user_id: Uuid,
    pub role: AppRole,
    pub is_active: Option<bool>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in AppRole::all() {
            assert_eq!(role.as_str().parse::<AppRole>().unwrap(), role);
        }
        assert!("superuser".parse::<AppRole>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&AppRole::FinanceAdmin).unwrap();
        assert_eq!(json, "\"financeadmin\"");
    }

    #[test]
    fn test_review_permissions() {
        assert!(AppRole::Admin.can_review());
        assert!(AppRole::FinanceAdmin.can_review());
        assert!(!AppRole::Employee.can_review());
    }
}
