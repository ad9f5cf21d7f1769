//! Content-system shapes for uploaded receipt files.

use crate::shape::{EntityShape, FieldDef, FieldType, StringFormat};

fn uuid() -> FieldType {
    FieldType::String(Some(StringFormat::Uuid))
}

fn datetime() -> FieldType {
    FieldType::String(Some(StringFormat::DateTime))
}

/// `cs.content_store` — metadata for objects held by a storage provider.
pub fn content_store() -> EntityShape {
    EntityShape::new(
        "ContentStore",
        vec![
            FieldDef::new("id", uuid()).identifier(),
            FieldDef::new("source_id", uuid()),
            FieldDef::new("external_key", FieldType::String(None)),
            FieldDef::new("mime_type", FieldType::String(None)),
            FieldDef::new("size_bytes", FieldType::Integer).nullable().insert_optional(),
            FieldDef::new("checksum", FieldType::String(None)).nullable().insert_optional(),
            FieldDef::new("metadata", FieldType::Object).nullable().insert_optional(),
            FieldDef::new("is_active", FieldType::Boolean).insert_optional(),
            FieldDef::new("created_by", uuid()).nullable().insert_optional(),
            FieldDef::new("created_at", datetime()).nullable().server_assigned(),
            FieldDef::new("updated_by", uuid()).nullable().server_assigned(),
            FieldDef::new("updated_at", datetime()).nullable().server_assigned(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_store_is_well_formed() {
        content_store().check().unwrap();
    }

    #[test]
    fn test_external_key_required_on_insert() {
        let insert = content_store().insert();
        let key = insert
            .fields
            .iter()
            .find(|f| f.def.name == "external_key")
            .unwrap();
        assert!(!key.optional);
    }
}
