//! Conformance tests between the typed entity models and the declarative
//! shapes: a serialized entity payload must validate under the matching
//! interchange schema, so the two layers cannot drift apart silently.

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

use receipthub_entity::content::ContentStoreInsert;
use receipthub_entity::finance::{PurchaseInsert, ReceiptInsert, ReceiptRow, ReceiptUpdate};
use receipthub_entity::identity::{MemberRoleInsert, OrgInsert, OrgMemberRow, OrgRow};
use receipthub_entity::AppRole;
use receipthub_schema::CompiledShape;

fn org_id() -> Uuid {
    Uuid::parse_str("0e3b7a40-33a1-4f1c-9c2e-5a8f0f6f2d11").unwrap()
}

fn user_id() -> Uuid {
    Uuid::parse_str("7b1f0b46-9c39-4ac8-8f41-2f1f9d3c01af").unwrap()
}

#[test]
fn org_row_conforms() {
    let row = OrgRow {
        id: org_id(),
        name: "Acme GmbH".into(),
        slug: "acme".into(),
        settings: serde_json::Map::new(),
        deleted_at: None,
        created_by: Some(user_id()),
        created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        updated_by: None,
        updated_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
    };

    let shape = CompiledShape::for_name("OrgRow").unwrap();
    shape.validate(&serde_json::to_value(&row).unwrap()).unwrap();
}

#[test]
fn org_insert_conforms_with_server_fields_omitted() {
    let insert = OrgInsert {
        name: "Acme GmbH".into(),
        slug: "acme".into(),
        ..Default::default()
    };

    let shape = CompiledShape::for_name("OrgInsert").unwrap();
    shape
        .validate(&serde_json::to_value(&insert).unwrap())
        .unwrap();
}

#[test]
fn org_member_row_conforms() {
    let row = OrgMemberRow {
        id: 12,
        org_id: org_id(),
        user_id: user_id(),
        is_owner: true,
        deleted_at: None,
        created_by: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 2, 8, 0, 0).unwrap(),
        updated_by: None,
        updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 8, 0, 0).unwrap(),
    };

    let shape = CompiledShape::for_name("OrgMemberRow").unwrap();
    shape.validate(&serde_json::to_value(&row).unwrap()).unwrap();
}

#[test]
fn member_role_insert_conforms() {
    let insert = MemberRoleInsert {
        id: None,
        member_id: 12,
        role: AppRole::FinanceAdmin,
        is_active: None,
        created_by: None,
        created_at: None,
        updated_by: None,
        updated_at: None,
    };

    let shape = CompiledShape::for_name("MemberRoleInsert").unwrap();
    shape
        .validate(&serde_json::to_value(&insert).unwrap())
        .unwrap();
}

#[test]
fn receipt_shapes_conform() {
    let insert = ReceiptInsert {
        supplier: Some("Cafe Nord".into()),
        receipt_date: Some(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()),
        ..Default::default()
    };
    CompiledShape::for_name("ReceiptInsert")
        .unwrap()
        .validate(&serde_json::to_value(&insert).unwrap())
        .unwrap();

    let row = ReceiptRow {
        id: 7,
        org_id: org_id(),
        supplier: Some("Cafe Nord".into()),
        content_id: None,
        is_active: Some(true),
        receipt_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        created_by: Some(user_id()),
        created_at: Some(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()),
        updated_by: None,
        updated_at: None,
    };
    CompiledShape::for_name("ReceiptRow")
        .unwrap()
        .validate(&serde_json::to_value(&row).unwrap())
        .unwrap();

    let update = ReceiptUpdate {
        id: 7,
        supplier: None,
        content_id: None,
        is_active: Some(false),
        receipt_date: None,
    };
    CompiledShape::for_name("ReceiptUpdate")
        .unwrap()
        .validate(&serde_json::to_value(&update).unwrap())
        .unwrap();
}

#[test]
fn purchase_insert_conforms() {
    let insert = PurchaseInsert {
        expense_type_id: Some(3),
        currency_id: Some(1),
        user_id: Some(user_id()),
        amount: 23.50,
        captured_timestamp: "2025-03-14T09:31:12+01:00".into(),
        reimbursable: true,
        receipt_id: Some(7),
        ..Default::default()
    };

    let shape = CompiledShape::for_name("PurchaseInsert").unwrap();
    shape
        .validate(&serde_json::to_value(&insert).unwrap())
        .unwrap();
}

#[test]
fn content_store_insert_conforms() {
    let insert = ContentStoreInsert {
        id: None,
        source_id: org_id(),
        external_key: "orgs/acme/receipts/7/1f2e3d4c-receipt.pdf".into(),
        mime_type: "application/pdf".into(),
        size_bytes: Some(48_213),
        checksum: Some("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08".into()),
        metadata: None,
        is_active: None,
        created_by: Some(user_id()),
    };

    let shape = CompiledShape::for_name("ContentStoreInsert").unwrap();
    shape
        .validate(&serde_json::to_value(&insert).unwrap())
        .unwrap();
}

#[test]
fn typed_update_without_identifier_fails_shape_validation() {
    // Hand-built payload: the typed structs make `id` unskippable, so a
    // raw value is the only way to produce this invalid case.
    let shape = CompiledShape::for_name("OrgUpdate").unwrap();
    assert!(!shape.is_valid(&json!({ "name": "Renamed" })));
}
