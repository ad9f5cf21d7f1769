//! The static schema registry.
//!
//! Every shape the synchronizer processes is declared here explicitly,
//! in a fixed order. There is no reflection over module exports: adding
//! an entity means adding a line to [`registrations`].

use crate::entities::{auth, content, finance, identity};
use crate::shape::{EntityShape, ObjectShape};

/// One named shape registered for synchronization.
#[derive(Debug, Clone)]
pub struct SchemaRegistration {
    /// Shape name, also the interchange file base name.
    pub name: String,
    /// The entity declaration the shape derives from.
    pub entity: EntityShape,
    /// The derived shape.
    pub shape: ObjectShape,
}

impl SchemaRegistration {
    fn from_shape(entity: &EntityShape, shape: ObjectShape) -> Self {
        Self {
            name: shape.name.clone(),
            entity: entity.clone(),
            shape,
        }
    }
}

/// Push Row, Insert, and Update registrations for an entity.
fn register_triple(out: &mut Vec<SchemaRegistration>, entity: EntityShape) {
    out.push(SchemaRegistration::from_shape(&entity, entity.row()));
    out.push(SchemaRegistration::from_shape(&entity, entity.insert()));
    out.push(SchemaRegistration::from_shape(&entity, entity.update()));
}

/// Push a row-only registration (read-only boundary shapes).
fn register_row(out: &mut Vec<SchemaRegistration>, entity: EntityShape) {
    out.push(SchemaRegistration::from_shape(&entity, entity.row()));
}

/// The full, ordered set of schema registrations.
pub fn registrations() -> Vec<SchemaRegistration> {
    let mut out = Vec::new();

    // Identity
    register_triple(&mut out, identity::org());
    register_triple(&mut out, identity::org_member());
    register_triple(&mut out, identity::member_role());
    register_row(&mut out, identity::user_role());

    // Auth boundary
    register_row(&mut out, auth::auth_user_id());

    // Finance
    register_triple(&mut out, finance::receipt());
    register_triple(&mut out, finance::purchase());
    register_triple(&mut out, finance::currency());
    register_triple(&mut out, finance::expense_type());
    register_triple(&mut out, finance::expense_category());

    // Content system
    register_triple(&mut out, content::content_store());

    out
}

/// Look up a registration by shape name.
pub fn find(name: &str) -> Option<SchemaRegistration> {
    registrations().into_iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_names_are_unique() {
        let regs = registrations();
        let mut names: Vec<_> = regs.iter().map(|r| r.name.as_str().to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), regs.len());
    }

    #[test]
    fn test_registration_order_is_stable() {
        let first: Vec<_> = registrations().into_iter().map(|r| r.name).collect();
        let second: Vec<_> = registrations().into_iter().map(|r| r.name).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "OrgRow");
    }

    #[test]
    fn test_row_only_entities_have_no_mutation_shapes() {
        assert!(find("UserRoleRow").is_some());
        assert!(find("UserRoleInsert").is_none());
        assert!(find("AuthUserIdRow").is_some());
        assert!(find("AuthUserIdUpdate").is_none());
    }

    #[test]
    fn test_every_registration_is_well_formed() {
        for reg in registrations() {
            reg.entity.check().unwrap();
        }
    }
}
