//! # receipthub-entity
//!
//! Typed domain models for ReceiptHub business entities.
//!
//! Each persisted entity follows the same three-shape convention enforced
//! by the schema layer:
//!
//! - **Row** — the full persisted record, all fields present.
//! - **Insert** — the payload accepted when creating a record;
//!   server-assigned fields (identifier, audit timestamps) are optional.
//! - **Update** — a partial update keyed by the mandatory identifier.
//!
//! Audit fields are written only by the persistence layer; client code
//! never populates them. The `receipthub-schema` crate carries the
//! matching declarative shapes and conformance tests keep the two crates
//! in agreement.

pub mod content;
pub mod finance;
pub mod identity;

pub use content::{ContentStoreInsert, ContentStoreRow, ContentStoreUpdate};
pub use finance::{PurchaseInsert, PurchaseRow, PurchaseUpdate};
pub use finance::{ReceiptInsert, ReceiptRow, ReceiptUpdate};
pub use identity::AppRole;
