//! # receipthub-schema
//!
//! Declarative shape definitions for every ReceiptHub business entity,
//! and the synchronizer that converts them into JSON Schema interchange
//! documents for non-Rust consumers.
//!
//! Each entity is described once as an [`EntityShape`]; the Row, Insert,
//! and Update variants are derived mechanically:
//!
//! - **Row** — every field required.
//! - **Insert** — server-assigned fields become optional.
//! - **Update** — every field optional except the identifier.
//!
//! The full set of shapes is enumerated by [`registry::registrations`],
//! a statically declared list processed in a fixed order.

pub mod entities;
pub mod interchange;
pub mod registry;
pub mod shape;
pub mod sync;
pub mod validate;

pub use registry::{SchemaRegistration, registrations};
pub use shape::{EntityShape, FieldDef, FieldType, ObjectShape, ShapeVariant, StringFormat};
pub use sync::{SyncReport, sync_schemas};
pub use validate::CompiledShape;
