//! # receipthub-storage
//!
//! Storage provider implementations for ReceiptHub receipt files.
//! Supports the local filesystem, Azure Blob storage, and S3-compatible
//! object stores, selected at runtime through a keyed provider registry.

pub mod attachments;
pub mod providers;
pub mod registry;
pub mod retry;

pub use attachments::AttachmentStore;
pub use registry::ProviderRegistry;
