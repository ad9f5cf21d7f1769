//! Content store entities for uploaded receipt files.

pub mod model;

pub use model::{ContentStoreInsert, ContentStoreRow, ContentStoreUpdate};
