use crate::store::StoreError;
use dentbase_schema::collection::Collection;

///
/// App
///
/// The host-runtime contract migrations program against: resolve existing
/// collections, persist new definitions. [`crate::store::Store`] is the
/// embedded implementation.
///

pub trait App {
    /// Resolve a collection by name or canonical id string.
    /// Fails with [`StoreError::CollectionNotFound`] when absent.
    fn find_collection_by_name_or_id(&self, name_or_id: &str) -> Result<&Collection, StoreError>;

    /// Resolve a collection that is allowed to be absent.
    ///
    /// The soft-dependency variant: absence is data, not an error. Callers
    /// that can tolerate a missing target use this instead of discarding the
    /// error from the strict lookup.
    fn find_collection(&self, name_or_id: &str) -> Option<&Collection>;

    /// Validate and persist a collection definition.
    fn save(&mut self, collection: Collection) -> Result<(), StoreError>;
}
