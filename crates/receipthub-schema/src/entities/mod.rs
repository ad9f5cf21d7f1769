//! Shape declarations for every ReceiptHub business entity.
//!
//! One function per entity, returning the single [`EntityShape`] its
//! Row/Insert/Update variants derive from. Field lists mirror the
//! persisted tables, audit columns included.
//!
//! [`EntityShape`]: crate::shape::EntityShape

pub mod auth;
pub mod content;
pub mod finance;
pub mod identity;
