pub mod collection;
pub mod error;
pub mod field;
pub mod types;

mod validate;

/// Maximum length for collection names.
pub const MAX_COLLECTION_NAME_LEN: usize = 64;

/// Maximum length for field names.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Field names the platform owns on every collection.
pub const RESERVED_FIELD_NAMES: &[&str] = &["created", "id", "updated"];

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        collection::{Collection, CollectionId, CollectionKind, FieldList},
        err,
        error::ErrorTree,
        field::{Field, FieldKind},
        types::FieldType,
    };
}
