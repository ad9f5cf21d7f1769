//! Identity entity shapes: organizations, memberships, role grants.

use crate::shape::{EntityShape, FieldDef, FieldType, StringFormat};

/// The application role enumeration, shared by every role-bearing shape.
pub const APP_ROLES: &[&str] = &["admin", "financeadmin", "employee"];

fn uuid() -> FieldType {
    FieldType::String(Some(StringFormat::Uuid))
}

fn datetime() -> FieldType {
    FieldType::String(Some(StringFormat::DateTime))
}

/// Standard audit columns appended to most entity shapes.
fn audit_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("created_by", uuid()).nullable().server_assigned(),
        FieldDef::new("created_at", datetime()).server_assigned(),
        FieldDef::new("updated_by", uuid()).nullable().server_assigned(),
        FieldDef::new("updated_at", datetime()).server_assigned(),
    ]
}

/// `identity.orgs` — tenant organizations.
pub fn org() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", uuid()).identifier(),
        FieldDef::new("name", FieldType::String(None)),
        FieldDef::new("slug", FieldType::String(None)),
        FieldDef::new("settings", FieldType::Object).insert_optional(),
        FieldDef::new("deleted_at", datetime()).nullable().insert_optional(),
    ];
    fields.extend(audit_fields());
    EntityShape::new("Org", fields)
}

/// `identity.org_members` — user memberships in an organization.
pub fn org_member() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", FieldType::Integer).identifier(),
        FieldDef::new("org_id", uuid()),
        FieldDef::new("user_id", uuid()),
        FieldDef::new("is_owner", FieldType::Boolean).insert_optional(),
        FieldDef::new("deleted_at", datetime()).nullable().insert_optional(),
    ];
    fields.extend(audit_fields());
    EntityShape::new("OrgMember", fields)
}

/// `identity.member_roles` — roles granted to memberships.
pub fn member_role() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", FieldType::Integer).identifier(),
        FieldDef::new("member_id", FieldType::Integer),
        FieldDef::new("role", FieldType::Enum(APP_ROLES)),
        FieldDef::new("is_active", FieldType::Boolean).insert_optional(),
    ];
    fields.extend(audit_fields());
    EntityShape::new("MemberRole", fields)
}

/// `identity.user_roles` — legacy global role grants, read-only from
/// clients. Registered as a row shape only.
pub fn user_role() -> EntityShape {
    EntityShape::new(
        "UserRole",
        vec![
            FieldDef::new("id", FieldType::Integer).identifier(),
            FieldDef::new("user_id", uuid()),
            FieldDef::new("role", FieldType::Enum(APP_ROLES)),
            FieldDef::new("is_active", FieldType::Boolean).nullable(),
            FieldDef::new("created_by", FieldType::String(None))
                .nullable()
                .server_assigned(),
            FieldDef::new("updated_by", FieldType::String(None))
                .nullable()
                .server_assigned(),
            FieldDef::new("created_at", datetime()).nullable().server_assigned(),
            FieldDef::new("updated_at", datetime()).nullable().server_assigned(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_shapes_are_well_formed() {
        for shape in [org(), org_member(), member_role(), user_role()] {
            shape.check().unwrap();
        }
    }

    #[test]
    fn test_org_identifier_is_uuid() {
        let shape = org();
        let id = shape.fields.iter().find(|f| f.identifier).unwrap();
        assert_eq!(id.ty, FieldType::String(Some(StringFormat::Uuid)));
    }

    #[test]
    fn test_membership_identifier_is_integer() {
        let shape = org_member();
        let id = shape.fields.iter().find(|f| f.identifier).unwrap();
        assert_eq!(id.ty, FieldType::Integer);
    }
}
