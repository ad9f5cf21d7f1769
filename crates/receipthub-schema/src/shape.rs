//! Declarative shape model for persisted entities.
//!
//! A shape describes the fields of one entity table. Row, Insert, and
//! Update variants are not written by hand; they are derived from the
//! single [`EntityShape`] declaration so the three can never drift apart.

use receipthub_core::{AppError, AppResult};

/// String formats recognized by the interchange representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    /// RFC 4122 UUID.
    Uuid,
    /// RFC 3339 date-time with offset.
    DateTime,
    /// Plain calendar date, `YYYY-MM-DD`.
    Date,
}

/// The type of a single entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A string, optionally constrained to a format.
    String(Option<StringFormat>),
    /// A whole number.
    Integer,
    /// A floating-point number.
    Number,
    /// A boolean flag. No tri-state; nullability is modeled separately.
    Boolean,
    /// A free-form JSON object.
    Object,
    /// A closed string enumeration.
    Enum(&'static [&'static str]),
}

/// Declaration of one entity field.
///
/// `nullable` means the persisted value may be NULL; it is orthogonal to
/// optionality, which the derivation rules decide per shape variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Column name.
    pub name: &'static str,
    /// Field type.
    pub ty: FieldType,
    /// Whether NULL is a legal persisted value.
    pub nullable: bool,
    /// Assigned by the persistence layer (identifier, audit fields).
    /// Optional in the Insert shape.
    pub server_assigned: bool,
    /// The stable identifier; immutable once set and mandatory in Update.
    pub identifier: bool,
    /// Optional in the Insert shape for reasons other than server
    /// assignment (e.g. a column default).
    pub insert_optional: bool,
}

impl FieldDef {
    /// Declare a required, non-nullable field.
    pub fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            server_assigned: false,
            identifier: false,
            insert_optional: false,
        }
    }

    /// Mark the field as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark the field as server-assigned.
    pub fn server_assigned(mut self) -> Self {
        self.server_assigned = true;
        self
    }

    /// Mark the field as the entity identifier (implies server-assigned).
    pub fn identifier(mut self) -> Self {
        self.identifier = true;
        self.server_assigned = true;
        self
    }

    /// Mark the field as optional on insert (column default).
    pub fn insert_optional(mut self) -> Self {
        self.insert_optional = true;
        self
    }
}

/// The variant of a derived shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeVariant {
    Row,
    Insert,
    Update,
}

impl ShapeVariant {
    /// Suffix appended to the entity name for this variant.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Row => "Row",
            Self::Insert => "Insert",
            Self::Update => "Update",
        }
    }
}

/// A field within a derived shape, with optionality resolved.
#[derive(Debug, Clone)]
pub struct ShapeField {
    /// The underlying declaration.
    pub def: FieldDef,
    /// Whether the key may be absent from a payload.
    pub optional: bool,
}

/// A derived object shape ready for interchange conversion.
#[derive(Debug, Clone)]
pub struct ObjectShape {
    /// Shape name, e.g. `"ReceiptInsert"`.
    pub name: String,
    /// Which variant this shape is.
    pub variant: ShapeVariant,
    /// Ordered fields.
    pub fields: Vec<ShapeField>,
}

/// The single declaration an entity's three shapes derive from.
#[derive(Debug, Clone)]
pub struct EntityShape {
    /// Entity base name in PascalCase, e.g. `"Receipt"`.
    pub name: &'static str,
    /// Ordered field declarations.
    pub fields: Vec<FieldDef>,
}

impl EntityShape {
    /// Create an entity shape declaration.
    pub fn new(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self { name, fields }
    }

    /// Check structural invariants of the declaration.
    ///
    /// A malformed declaration is a programming error, but the
    /// synchronizer must be able to skip-and-report it rather than
    /// aborting the whole batch, so this is a fallible check instead
    /// of a panic.
    pub fn check(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::conversion("Entity shape has an empty name"));
        }
        if self.fields.is_empty() {
            return Err(AppError::conversion(format!(
                "Entity shape '{}' declares no fields",
                self.name
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name) {
                return Err(AppError::conversion(format!(
                    "Entity shape '{}' declares field '{}' twice",
                    self.name, field.name
                )));
            }
            if let FieldType::Enum(variants) = &field.ty {
                if variants.is_empty() {
                    return Err(AppError::conversion(format!(
                        "Entity shape '{}' field '{}' is an empty enum",
                        self.name, field.name
                    )));
                }
            }
        }

        let identifiers = self.fields.iter().filter(|f| f.identifier).count();
        if identifiers != 1 {
            return Err(AppError::conversion(format!(
                "Entity shape '{}' declares {identifiers} identifier fields, expected exactly 1",
                self.name
            )));
        }

        Ok(())
    }

    /// Derive one shape variant.
    pub fn derive(&self, variant: ShapeVariant) -> ObjectShape {
        let fields = self
            .fields
            .iter()
            .map(|def| {
                let optional = match variant {
                    ShapeVariant::Row => false,
                    ShapeVariant::Insert => def.server_assigned || def.insert_optional,
                    ShapeVariant::Update => !def.identifier,
                };
                ShapeField {
                    def: def.clone(),
                    optional,
                }
            })
            .collect();

        ObjectShape {
            name: format!("{}{}", self.name, variant.suffix()),
            variant,
            fields,
        }
    }

    /// The full persisted record shape: every field required.
    pub fn row(&self) -> ObjectShape {
        self.derive(ShapeVariant::Row)
    }

    /// The creation shape: server-assigned fields optional.
    pub fn insert(&self) -> ObjectShape {
        self.derive(ShapeVariant::Insert)
    }

    /// The partial-update shape: everything optional except the identifier.
    pub fn update(&self) -> ObjectShape {
        self.derive(ShapeVariant::Update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EntityShape {
        EntityShape::new(
            "Widget",
            vec![
                FieldDef::new("id", FieldType::Integer).identifier(),
                FieldDef::new("label", FieldType::String(None)),
                FieldDef::new("is_active", FieldType::Boolean).insert_optional(),
                FieldDef::new("created_at", FieldType::String(Some(StringFormat::DateTime)))
                    .server_assigned(),
            ],
        )
    }

    #[test]
    fn test_row_requires_everything() {
        let row = sample().row();
        assert_eq!(row.name, "WidgetRow");
        assert!(row.fields.iter().all(|f| !f.optional));
    }

    #[test]
    fn test_insert_relaxes_server_assigned_fields() {
        let insert = sample().insert();
        let optional: Vec<_> = insert
            .fields
            .iter()
            .filter(|f| f.optional)
            .map(|f| f.def.name)
            .collect();
        assert_eq!(optional, vec!["id", "is_active", "created_at"]);
    }

    #[test]
    fn test_update_keeps_identifier_mandatory() {
        let update = sample().update();
        for field in &update.fields {
            assert_eq!(field.optional, field.def.name != "id");
        }
    }

    #[test]
    fn test_check_rejects_duplicate_fields() {
        let shape = EntityShape::new(
            "Broken",
            vec![
                FieldDef::new("id", FieldType::Integer).identifier(),
                FieldDef::new("name", FieldType::String(None)),
                FieldDef::new("name", FieldType::String(None)),
            ],
        );
        assert!(shape.check().is_err());
    }

    #[test]
    fn test_check_requires_exactly_one_identifier() {
        let shape = EntityShape::new("NoId", vec![FieldDef::new("name", FieldType::String(None))]);
        assert!(shape.check().is_err());
    }
}
