//! Finance entity shapes: receipts, purchases, and reference data.

use crate::shape::{EntityShape, FieldDef, FieldType, StringFormat};

fn uuid() -> FieldType {
    FieldType::String(Some(StringFormat::Uuid))
}

fn datetime() -> FieldType {
    FieldType::String(Some(StringFormat::DateTime))
}

/// Audit columns on the finance tables; nullable because rows predate
/// the audit triggers.
fn audit_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("created_by", uuid()).nullable().server_assigned(),
        FieldDef::new("created_at", datetime()).nullable().server_assigned(),
        FieldDef::new("updated_by", uuid()).nullable().server_assigned(),
        FieldDef::new("updated_at", datetime()).nullable().server_assigned(),
    ]
}

/// Legacy audit columns kept by the reference tables.
fn legacy_audit_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("created_user_id", FieldType::String(None))
            .nullable()
            .server_assigned(),
        FieldDef::new("modified_user_id", FieldType::String(None))
            .nullable()
            .server_assigned(),
        FieldDef::new("is_active", FieldType::Boolean).nullable().insert_optional(),
        FieldDef::new("created_timestamp", datetime()).nullable().server_assigned(),
        FieldDef::new("modified_timestamp", datetime()).nullable().server_assigned(),
    ]
}

/// `finance.receipts` — captured receipts.
pub fn receipt() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", FieldType::Integer).identifier(),
        // Filled from the caller's active organization when omitted.
        FieldDef::new("org_id", uuid()).insert_optional(),
        FieldDef::new("supplier", FieldType::String(None)).nullable().insert_optional(),
        FieldDef::new("content_id", uuid()).nullable().insert_optional(),
        FieldDef::new("is_active", FieldType::Boolean).nullable().insert_optional(),
        FieldDef::new("receipt_date", FieldType::String(Some(StringFormat::Date)))
            .insert_optional(),
    ];
    fields.extend(audit_fields());
    EntityShape::new("Receipt", fields)
}

/// `finance.purchases` — expense lines.
pub fn purchase() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", FieldType::Integer).identifier(),
        FieldDef::new("expense_type_id", FieldType::Integer).nullable().insert_optional(),
        FieldDef::new("other_category", FieldType::String(None))
            .nullable()
            .insert_optional(),
        FieldDef::new("currency_id", FieldType::Integer).nullable().insert_optional(),
        FieldDef::new("user_id", uuid()).nullable().insert_optional(),
        FieldDef::new("amount", FieldType::Number),
        FieldDef::new("captured_timestamp", FieldType::String(None)),
        FieldDef::new("deleted_at", datetime()).nullable().insert_optional(),
        FieldDef::new("reimbursable", FieldType::Boolean),
        FieldDef::new("receipt_id", FieldType::Integer).nullable().insert_optional(),
    ];
    fields.extend(audit_fields());
    EntityShape::new("Purchase", fields)
}

/// `finance.currencies` — reference data.
pub fn currency() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", FieldType::Integer).identifier(),
        FieldDef::new("name", FieldType::String(None)),
        FieldDef::new("description", FieldType::String(None)).nullable().insert_optional(),
        FieldDef::new("symbol", FieldType::String(None)).nullable().insert_optional(),
    ];
    fields.extend(legacy_audit_fields());
    EntityShape::new("Currency", fields)
}

/// `finance.expense_types` — reference data.
pub fn expense_type() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", FieldType::Integer).identifier(),
        FieldDef::new("expense_category_id", FieldType::Integer)
            .nullable()
            .insert_optional(),
        FieldDef::new("name", FieldType::String(None)),
        FieldDef::new("description", FieldType::String(None)).nullable().insert_optional(),
    ];
    fields.extend(legacy_audit_fields());
    EntityShape::new("ExpenseType", fields)
}

/// `finance.expense_categories` — reference data.
pub fn expense_category() -> EntityShape {
    let mut fields = vec![
        FieldDef::new("id", FieldType::Integer).identifier(),
        FieldDef::new("name", FieldType::String(None)),
        FieldDef::new("description", FieldType::String(None)).nullable().insert_optional(),
    ];
    fields.extend(legacy_audit_fields());
    EntityShape::new("ExpenseCategory", fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finance_shapes_are_well_formed() {
        for shape in [
            receipt(),
            purchase(),
            currency(),
            expense_type(),
            expense_category(),
        ] {
            shape.check().unwrap();
        }
    }

    #[test]
    fn test_purchase_amount_is_required_on_insert() {
        let insert = purchase().insert();
        let amount = insert
            .fields
            .iter()
            .find(|f| f.def.name == "amount")
            .unwrap();
        assert!(!amount.optional);
    }

    #[test]
    fn test_receipt_org_is_optional_on_insert_but_required_on_row() {
        let shape = receipt();
        let insert_org = shape
            .insert()
            .fields
            .into_iter()
            .find(|f| f.def.name == "org_id")
            .unwrap();
        assert!(insert_org.optional);
        let row_org = shape
            .row()
            .fields
            .into_iter()
            .find(|f| f.def.name == "org_id")
            .unwrap();
        assert!(!row_org.optional);
    }
}
