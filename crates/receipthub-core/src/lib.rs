//! # receipthub-core
//!
//! Core crate for ReceiptHub. Contains the storage provider trait,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ReceiptHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
