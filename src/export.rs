//! # Export Service
//!
//! Writes a snapshot of records to a destination of the caller's choosing, using
//! the same JSON schema as the main document. Exports never touch the main
//! document or the repository.
//!
//! ## Empty Snapshots
//!
//! Exporting nothing is allowed here and produces `[]`. Interactive callers are
//! expected to check first and tell the user there is no data instead of writing
//! an empty file; [`crate::api::ZooApi::export`] does exactly that.

use crate::error::{Result, ZooError};
use crate::model::Animal;
use crate::store::fs::write_document;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Which snapshot an export should write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportSelection {
    /// The whole collection, in collection order.
    #[default]
    All,
    /// The view produced by the most recent query.
    LastQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub count: usize,
}

/// `zoo_export_<YYYYMMDD_HHMMSS>.json` for the given moment.
pub fn default_export_filename(at: NaiveDateTime) -> String {
    format!("zoo_export_{}.json", at.format(EXPORT_TIMESTAMP_FORMAT))
}

/// [`default_export_filename`] for the current local time.
pub fn default_export_filename_now() -> String {
    default_export_filename(Local::now().naive_local())
}

/// Write `animals` to `destination`, replacing it. Returns how many were written.
pub fn run(animals: &[Animal], destination: &Path) -> Result<usize> {
    debug!("Exporting {} animals to {:?}", animals.len(), destination);
    write_document(destination, animals, true).map_err(|e| ZooError::export(destination, e))?;
    info!("Exported {} animals to {:?}", animals.len(), destination);
    Ok(animals.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageFault;
    use crate::store::fs::decode_document;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_filename_uses_compact_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 42)
            .unwrap();
        assert_eq!(default_export_filename(at), "zoo_export_20240309_070542.json");
    }

    #[test]
    fn test_now_filename_has_expected_shape() {
        let name = default_export_filename_now();
        assert!(name.starts_with("zoo_export_"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "zoo_export_YYYYMMDD_HHMMSS.json".len());
    }

    #[test]
    fn test_writes_records_in_given_order() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.json");
        let mut animals = StoreFixture::sample().animals();
        animals.reverse();

        let count = run(&animals, &dest).unwrap();
        assert_eq!(count, 4);

        let raw = fs::read_to_string(&dest).unwrap();
        assert_eq!(decode_document(&raw).unwrap(), Some(animals));
    }

    #[test]
    fn test_empty_snapshot_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("empty.json");
        assert_eq!(run(&[], &dest).unwrap(), 0);
        assert_eq!(fs::read_to_string(&dest).unwrap().trim(), "[]");
    }

    #[test]
    fn test_unwritable_destination_is_export_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be replaced by a file.
        let dest = dir.path().join("taken");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "x").unwrap();

        match run(&StoreFixture::sample().animals(), &dest) {
            Err(ZooError::Export {
                path,
                source: StorageFault::Io(_),
            }) => assert_eq!(path, dest),
            other => panic!("Expected export error, got {:?}", other),
        }
        assert!(dest.is_dir());
    }
}
