//! Storage provider implementations.

pub mod azure;
pub mod local;
#[cfg(feature = "s3")]
pub mod s3;

pub use azure::AzureBlobProvider;
pub use local::LocalStorageProvider;
