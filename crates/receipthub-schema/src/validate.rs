//! Validation of JSON payloads against registered shapes.
//!
//! Interchange documents are compiled with the `jsonschema` crate so that
//! the Rust side validates exactly what non-Rust consumers of the
//! interchange files will validate.

use jsonschema::JSONSchema;
use serde_json::Value;

use receipthub_core::{AppError, AppResult};

use crate::interchange::to_interchange;
use crate::registry::{self, SchemaRegistration};

/// A compiled shape ready to validate payloads.
pub struct CompiledShape {
    name: String,
    compiled: JSONSchema,
}

impl std::fmt::Debug for CompiledShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledShape")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CompiledShape {
    /// Compile a registration's interchange document.
    pub fn compile(registration: &SchemaRegistration) -> AppResult<Self> {
        let doc = to_interchange(registration)?;
        let compiled = JSONSchema::compile(&doc).map_err(|e| {
            AppError::conversion(format!(
                "Failed to compile interchange schema '{}': {e}",
                registration.name
            ))
        })?;
        Ok(Self {
            name: registration.name.clone(),
            compiled,
        })
    }

    /// Compile a registered shape by name.
    pub fn for_name(name: &str) -> AppResult<Self> {
        let registration = registry::find(name)
            .ok_or_else(|| AppError::not_found(format!("No registered shape named '{name}'")))?;
        Self::compile(&registration)
    }

    /// The shape name this validator was compiled from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate a payload, reporting every violation.
    pub fn validate(&self, value: &Value) -> AppResult<()> {
        if let Err(errors) = self.compiled.validate(value) {
            let details: Vec<String> = errors
                .map(|e| format!("{}: {e}", e.instance_path))
                .collect();
            return Err(AppError::validation(format!(
                "Payload is not valid under '{}': {}",
                self.name,
                details.join("; ")
            )));
        }
        Ok(())
    }

    /// Check validity without collecting violation details.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.compiled.is_valid(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_payload_requires_identifier() {
        let shape = CompiledShape::for_name("ReceiptUpdate").unwrap();
        assert!(shape.is_valid(&json!({ "id": 12, "supplier": "Cafe Nord" })));
        assert!(!shape.is_valid(&json!({ "supplier": "Cafe Nord" })));
    }

    #[test]
    fn test_row_payload_rejects_unknown_fields() {
        let shape = CompiledShape::for_name("AuthUserIdRow").unwrap();
        assert!(shape.is_valid(&json!({ "id": "0e3b7a40-33a1-4f1c-9c2e-5a8f0f6f2d11" })));
        assert!(!shape.is_valid(&json!({
            "id": "0e3b7a40-33a1-4f1c-9c2e-5a8f0f6f2d11",
            "email": "who@example.org"
        })));
    }

    #[test]
    fn test_role_enum_is_closed() {
        let shape = CompiledShape::for_name("MemberRoleUpdate").unwrap();
        assert!(shape.is_valid(&json!({ "id": 1, "role": "financeadmin" })));
        assert!(!shape.is_valid(&json!({ "id": 1, "role": "superuser" })));
    }

    #[test]
    fn test_insert_completed_with_server_fields_is_row_valid() {
        let insert = CompiledShape::for_name("OrgMemberInsert").unwrap();
        let row = CompiledShape::for_name("OrgMemberRow").unwrap();

        let mut value = json!({
            "org_id": "0e3b7a40-33a1-4f1c-9c2e-5a8f0f6f2d11",
            "user_id": "7b1f0b46-9c39-4ac8-8f41-2f1f9d3c01af",
            "is_owner": false,
            "deleted_at": null
        });
        insert.validate(&value).unwrap();

        let obj = value.as_object_mut().unwrap();
        obj.insert("id".into(), json!(41));
        obj.insert("created_by".into(), json!(null));
        obj.insert("created_at".into(), json!("2025-03-14T09:26:53+00:00"));
        obj.insert("updated_by".into(), json!(null));
        obj.insert("updated_at".into(), json!("2025-03-14T09:26:53+00:00"));
        row.validate(&value).unwrap();
    }

    #[test]
    fn test_unknown_shape_name_is_not_found() {
        let err = CompiledShape::for_name("NoSuchShape").unwrap_err();
        assert_eq!(err.kind, receipthub_core::error::ErrorKind::NotFound);
    }
}
