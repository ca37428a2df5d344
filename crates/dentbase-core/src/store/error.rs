use dentbase_schema::error::ErrorTree;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("collection '{name}' not found")]
    CollectionNotFound { name: String },

    #[error("collection '{name}' already exists")]
    DuplicateCollection { name: String },

    #[error("collection '{collection}' is still referenced by '{referrer}'")]
    CollectionInUse {
        collection: String,
        referrer: String,
    },

    #[error("collection '{collection}', field '{field}': unknown relation target '{target}'")]
    UnknownRelationTarget {
        collection: String,
        field: String,
        target: String,
    },

    #[error("collection validation failed:\n{0}")]
    Validation(#[from] ErrorTree),

    #[error("snapshot {}: {message}", path.display())]
    Snapshot { path: PathBuf, message: String },
}
