//! Trait definitions shared across ReceiptHub crates.

pub mod storage;
