//! Conversion of derived shapes into JSON Schema interchange documents.
//!
//! The interchange format is draft-07 JSON Schema with the shape placed
//! under `definitions` and referenced from the document root, so a
//! non-Rust validation layer can consume the same shapes.

use serde_json::{Map, Value, json};

use receipthub_core::AppResult;

use crate::registry::SchemaRegistration;
use crate::shape::{FieldType, ObjectShape, ShapeField, StringFormat};

/// Regex pattern for plain calendar dates.
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// JSON Schema draft identifier emitted on every document.
pub const SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Convert a registration into its interchange document.
///
/// Fails with a `Conversion` error if the underlying entity declaration is
/// malformed; the synchronizer reports such entries and continues.
pub fn to_interchange(registration: &SchemaRegistration) -> AppResult<Value> {
    registration.entity.check()?;

    let body = object_schema(&registration.shape);
    let mut definitions = Map::new();
    definitions.insert(registration.name.clone(), body);

    Ok(json!({
        "$ref": format!("#/definitions/{}", registration.name),
        "definitions": Value::Object(definitions),
        "$schema": SCHEMA_DRAFT,
    }))
}

fn object_schema(shape: &ObjectShape) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in &shape.fields {
        properties.insert(field.def.name.to_string(), field_schema(field));
        if !field.optional {
            required.push(Value::String(field.def.name.to_string()));
        }
    }

    let mut body = Map::new();
    body.insert("type".into(), json!("object"));
    body.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        body.insert("required".into(), Value::Array(required));
    }
    body.insert("additionalProperties".into(), json!(false));
    Value::Object(body)
}

fn field_schema(field: &ShapeField) -> Value {
    let base = match &field.def.ty {
        FieldType::String(format) => {
            let mut schema = Map::new();
            schema.insert("type".into(), json!("string"));
            match format {
                Some(StringFormat::Uuid) => {
                    schema.insert("format".into(), json!("uuid"));
                }
                Some(StringFormat::DateTime) => {
                    schema.insert("format".into(), json!("date-time"));
                }
                Some(StringFormat::Date) => {
                    schema.insert("pattern".into(), json!(DATE_PATTERN));
                }
                None => {}
            }
            Value::Object(schema)
        }
        FieldType::Integer => json!({ "type": "integer" }),
        FieldType::Number => json!({ "type": "number" }),
        FieldType::Boolean => json!({ "type": "boolean" }),
        FieldType::Object => json!({ "type": "object", "additionalProperties": true }),
        FieldType::Enum(variants) => json!({ "type": "string", "enum": variants }),
    };

    if !field.def.nullable {
        return base;
    }

    // Simple types fold null into the type array; composed schemas
    // (enum, format-constrained strings) wrap in anyOf instead.
    match &field.def.ty {
        FieldType::Integer | FieldType::Number | FieldType::Boolean => {
            let type_name = base["type"].clone();
            json!({ "type": [type_name, "null"] })
        }
        FieldType::String(None) => json!({ "type": ["string", "null"] }),
        _ => json!({ "anyOf": [base, { "type": "null" }] }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{EntityShape, FieldDef};

    fn registration() -> SchemaRegistration {
        let entity = EntityShape::new(
            "Gadget",
            vec![
                FieldDef::new("id", FieldType::String(Some(StringFormat::Uuid))).identifier(),
                FieldDef::new("label", FieldType::String(None)).nullable(),
                FieldDef::new("count", FieldType::Integer).nullable(),
                FieldDef::new("kind", FieldType::Enum(&["simple", "fancy"])),
                FieldDef::new("made_on", FieldType::String(Some(StringFormat::Date))),
            ],
        );
        let shape = entity.row();
        SchemaRegistration {
            name: shape.name.clone(),
            entity,
            shape,
        }
    }

    #[test]
    fn test_document_layout_matches_interchange_convention() {
        let doc = to_interchange(&registration()).unwrap();
        assert_eq!(doc["$ref"], "#/definitions/GadgetRow");
        assert_eq!(doc["$schema"], SCHEMA_DRAFT);
        let body = &doc["definitions"]["GadgetRow"];
        assert_eq!(body["type"], "object");
        assert_eq!(body["additionalProperties"], false);
    }

    #[test]
    fn test_nullable_scalar_becomes_type_union() {
        let doc = to_interchange(&registration()).unwrap();
        let props = &doc["definitions"]["GadgetRow"]["properties"];
        assert_eq!(props["label"]["type"], serde_json::json!(["string", "null"]));
        assert_eq!(props["count"]["type"], serde_json::json!(["integer", "null"]));
    }

    #[test]
    fn test_formats_and_enums() {
        let doc = to_interchange(&registration()).unwrap();
        let props = &doc["definitions"]["GadgetRow"]["properties"];
        assert_eq!(props["id"]["format"], "uuid");
        assert_eq!(props["kind"]["enum"], serde_json::json!(["simple", "fancy"]));
        assert_eq!(props["made_on"]["pattern"], DATE_PATTERN);
    }

    #[test]
    fn test_row_requires_all_fields() {
        let doc = to_interchange(&registration()).unwrap();
        let required = doc["definitions"]["GadgetRow"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 5);
    }

    #[test]
    fn test_malformed_entity_is_a_conversion_error() {
        let entity = EntityShape::new("Bad", vec![]);
        let shape = entity.row();
        let reg = SchemaRegistration {
            name: shape.name.clone(),
            entity,
            shape,
        };
        let err = to_interchange(&reg).unwrap_err();
        assert_eq!(err.kind, receipthub_core::error::ErrorKind::Conversion);
    }
}
