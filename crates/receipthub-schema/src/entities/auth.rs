//! Auth boundary shapes.

use crate::shape::{EntityShape, FieldDef, FieldType, StringFormat};

/// Minimal `auth.users` reference for foreign-key validation at the
/// boundary. Only the identifier is exposed; the auth system owns the
/// rest of the record. Registered as a row shape only.
pub fn auth_user_id() -> EntityShape {
    EntityShape::new(
        "AuthUserId",
        vec![FieldDef::new("id", FieldType::String(Some(StringFormat::Uuid))).identifier()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_id_is_well_formed() {
        auth_user_id().check().unwrap();
    }
}
