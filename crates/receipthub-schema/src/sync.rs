//! The schema synchronizer.
//!
//! A one-shot batch process: convert every registered shape into its
//! interchange document and write one pretty-printed JSON file per shape
//! into the output directory. Each write is independent and idempotent,
//! so rerunning with unchanged shapes regenerates byte-identical files.
//!
//! Failure policy: a conversion failure is recorded and the batch
//! continues; an I/O failure (directory creation or file write) aborts
//! the batch.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use receipthub_core::{AppError, AppResult};

use crate::interchange::to_interchange;
use crate::registry::SchemaRegistration;

/// One successfully written interchange file.
#[derive(Debug, Clone)]
pub struct SyncedSchema {
    /// Shape name.
    pub name: String,
    /// Path the file was written to.
    pub path: PathBuf,
}

/// One registration that failed conversion and was skipped.
#[derive(Debug, Clone)]
pub struct SkippedSchema {
    /// Shape name.
    pub name: String,
    /// Why conversion failed.
    pub reason: String,
}

/// Outcome of one synchronizer run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Files written, in registration order.
    pub written: Vec<SyncedSchema>,
    /// Registrations skipped because conversion failed.
    pub skipped: Vec<SkippedSchema>,
}

impl SyncReport {
    /// Whether every registration was written.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Synchronize the given registrations into `output_dir`.
///
/// Creates the output directory if absent. Returns an error only for
/// I/O failures; conversion failures are reported through the
/// [`SyncReport`] so one malformed shape does not block the rest.
pub fn sync_schemas(
    registrations: &[SchemaRegistration],
    output_dir: &Path,
) -> AppResult<SyncReport> {
    fs::create_dir_all(output_dir).map_err(|e| {
        AppError::with_source(
            receipthub_core::error::ErrorKind::Storage,
            format!("Failed to create output directory: {}", output_dir.display()),
            e,
        )
    })?;

    let mut report = SyncReport::default();

    for registration in registrations {
        let doc = match to_interchange(registration) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(name = %registration.name, error = %e, "Skipping schema: conversion failed");
                report.skipped.push(SkippedSchema {
                    name: registration.name.clone(),
                    reason: e.message.clone(),
                });
                continue;
            }
        };

        let path = output_dir.join(format!("{}.json", registration.name));
        let contents = serde_json::to_string_pretty(&doc)?;
        fs::write(&path, &contents).map_err(|e| {
            AppError::with_source(
                receipthub_core::error::ErrorKind::Storage,
                format!("Failed to write interchange file: {}", path.display()),
                e,
            )
        })?;

        info!(name = %registration.name, path = %path.display(), "Synced schema");
        report.written.push(SyncedSchema {
            name: registration.name.clone(),
            path,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{auth, identity};
    use crate::registry::{self, SchemaRegistration};
    use crate::shape::EntityShape;

    fn two_registrations() -> Vec<SchemaRegistration> {
        let org = identity::org();
        let auth_user = auth::auth_user_id();
        vec![
            SchemaRegistration {
                name: org.row().name,
                shape: org.row(),
                entity: org,
            },
            SchemaRegistration {
                name: auth_user.row().name,
                shape: auth_user.row(),
                entity: auth_user,
            },
        ]
    }

    #[test]
    fn test_two_entities_produce_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let report = sync_schemas(&two_registrations(), dir.path()).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.written.len(), 2);
        assert!(dir.path().join("OrgRow.json").exists());
        assert!(dir.path().join("AuthUserIdRow.json").exists());
    }

    #[test]
    fn test_output_parses_and_name_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let report = sync_schemas(&registry::registrations(), dir.path()).unwrap();
        assert!(report.is_clean());

        for synced in &report.written {
            let raw = fs::read_to_string(&synced.path).unwrap();
            let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
            let definitions = doc["definitions"].as_object().unwrap();
            assert!(definitions.contains_key(&synced.name));
            assert_eq!(
                doc["$ref"],
                format!("#/definitions/{}", synced.name)
            );
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let regs = two_registrations();

        sync_schemas(&regs, dir.path()).unwrap();
        let first = fs::read(dir.path().join("OrgRow.json")).unwrap();
        sync_schemas(&regs, dir.path()).unwrap();
        let second = fs::read(dir.path().join("OrgRow.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_output_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("interchange").join("v1");
        let report = sync_schemas(&two_registrations(), &nested).unwrap();
        assert_eq!(report.written.len(), 2);
    }

    #[test]
    fn test_malformed_shape_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let broken = EntityShape::new("Broken", vec![]);
        let mut regs = two_registrations();
        regs.insert(
            1,
            SchemaRegistration {
                name: broken.row().name,
                shape: broken.row(),
                entity: broken,
            },
        );

        let report = sync_schemas(&regs, dir.path()).unwrap();
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "BrokenRow");
        assert!(!dir.path().join("BrokenRow.json").exists());
    }
}
