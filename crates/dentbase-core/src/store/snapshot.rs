use crate::store::{AppliedMigration, StoreError};
use dentbase_schema::collection::Collection;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, io, path::Path};

///
/// Snapshot
///
/// On-disk schema document: every collection definition plus the
/// applied-migration ledger, serialized as JSON.
///

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Snapshot {
    pub collections: Vec<Collection>,
    pub applied: Vec<AppliedMigration>,
}

impl Snapshot {
    /// Load a snapshot; `None` when the file does not exist yet.
    ///
    /// A present-but-unreadable snapshot is surfaced as an error, never a
    /// silent reset.
    pub fn load(path: &Path) -> Result<Option<Self>, StoreError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(snapshot_error(path, &e)),
        };
        let snapshot = serde_json::from_slice(&bytes).map_err(|e| snapshot_error(path, &e))?;

        Ok(Some(snapshot))
    }

    /// Write the snapshot atomically: temp file in the same directory, then
    /// rename over the target.
    pub fn write(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(self).map_err(|e| snapshot_error(path, &e))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| snapshot_error(&tmp, &e))?;
        fs::rename(&tmp, path).map_err(|e| snapshot_error(path, &e))?;

        Ok(())
    }
}

fn snapshot_error(path: &Path, err: &dyn fmt::Display) -> StoreError {
    StoreError::Snapshot {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
