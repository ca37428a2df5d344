mod bootstrap;
mod error;
mod snapshot;

pub use error::StoreError;
pub use snapshot::Snapshot;

use crate::{app::App, migrate::MigrationKey};
use dentbase_schema::collection::{Collection, CollectionId};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use time::OffsetDateTime;

const SNAPSHOT_FILE: &str = "schema.json";

///
/// AppliedMigration
///
/// One ledger entry; the ledger is what makes re-running the full migration
/// sequence a no-op.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppliedMigration {
    pub key: MigrationKey,
    pub name: String,

    #[serde(with = "time::serde::rfc3339")]
    pub applied_at: OffsetDateTime,
}

///
/// Store
///
/// Embedded schema registry: collections indexed by name plus the
/// applied-migration ledger, optionally backed by a JSON snapshot.
///

#[derive(Debug)]
pub struct Store {
    collections: BTreeMap<String, Collection>,
    applied: BTreeMap<MigrationKey, AppliedMigration>,
    snapshot_path: Option<PathBuf>,
}

impl Store {
    /// Fresh in-memory store with system collections provisioned.
    #[must_use]
    pub fn in_memory() -> Self {
        let mut store = Self {
            collections: BTreeMap::new(),
            applied: BTreeMap::new(),
            snapshot_path: None,
        };
        store.install_system_collections();

        store
    }

    /// Open (or initialize) a snapshot-backed store under `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| StoreError::Snapshot {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = dir.join(SNAPSHOT_FILE);

        let mut store = Self {
            collections: BTreeMap::new(),
            applied: BTreeMap::new(),
            snapshot_path: Some(path.clone()),
        };
        match Snapshot::load(&path)? {
            Some(loaded) => store.restore(&path, loaded)?,
            None => {
                store.install_system_collections();
                store.persist()?;
            }
        }

        Ok(store)
    }

    fn restore(&mut self, path: &Path, loaded: Snapshot) -> Result<(), StoreError> {
        for collection in loaded.collections {
            let name = collection.name.clone();
            if self.collections.insert(name.clone(), collection).is_some() {
                return Err(StoreError::Snapshot {
                    path: path.to_path_buf(),
                    message: format!("duplicate collection '{name}'"),
                });
            }
        }
        for entry in loaded.applied {
            self.applied.insert(entry.key, entry);
        }

        Ok(())
    }

    // Bootstrap definitions are statically known-valid, so they bypass the
    // save path and keep construction infallible.
    fn install_system_collections(&mut self) {
        for collection in bootstrap::system_collections() {
            self.collections.insert(collection.name.clone(), collection);
        }
    }

    /// Write the snapshot when the store is file-backed; no-op otherwise.
    pub fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        self.snapshot().write(path)
    }

    /// Point-in-time serializable copy of the store.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            collections: self.collections.values().cloned().collect(),
            applied: self.applied.values().cloned().collect(),
        }
    }

    /// All collections, ordered by name.
    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    /// Resolve a collection's name from its id.
    #[must_use]
    pub fn collection_name(&self, id: CollectionId) -> Option<&str> {
        self.collections
            .values()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    fn lookup(&self, name_or_id: &str) -> Option<&Collection> {
        if let Some(collection) = self.collections.get(name_or_id) {
            return Some(collection);
        }

        name_or_id
            .parse::<CollectionId>()
            .ok()
            .and_then(|id| self.collections.values().find(|c| c.id == id))
    }

    // Every relation target must resolve within the registry or to the
    // collection being saved (self-relations).
    fn check_relation_targets(&self, collection: &Collection) -> Result<(), StoreError> {
        for field in &collection.fields {
            if let Some(target) = field.kind.relation_target() {
                let resolves =
                    target == collection.id || self.collections.values().any(|c| c.id == target);
                if !resolves {
                    return Err(StoreError::UnknownRelationTarget {
                        collection: collection.name.clone(),
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Remove a collection, refusing while other collections still target it.
    pub fn delete_collection(&mut self, name: &str) -> Result<(), StoreError> {
        let victim = self
            .lookup(name)
            .ok_or_else(|| StoreError::CollectionNotFound {
                name: name.to_string(),
            })?;
        let victim_id = victim.id;
        let victim_name = victim.name.clone();

        for other in self.collections.values() {
            if other.id == victim_id {
                continue;
            }
            for field in &other.fields {
                if field.kind.relation_target() == Some(victim_id) {
                    return Err(StoreError::CollectionInUse {
                        collection: victim_name,
                        referrer: other.name.clone(),
                    });
                }
            }
        }
        self.collections.remove(&victim_name);

        Ok(())
    }

    /// Whether the ledger already holds `key`.
    #[must_use]
    pub fn is_applied(&self, key: MigrationKey) -> bool {
        self.applied.contains_key(&key)
    }

    pub(crate) fn mark_applied(&mut self, key: MigrationKey, name: &str) {
        self.applied.insert(key, AppliedMigration {
            key,
            name: name.to_string(),
            applied_at: OffsetDateTime::now_utc(),
        });
    }

    pub(crate) fn mark_reverted(&mut self, key: MigrationKey) -> bool {
        self.applied.remove(&key).is_some()
    }

    /// Ledger entries in ascending key order.
    pub fn applied(&self) -> impl Iterator<Item = &AppliedMigration> {
        self.applied.values()
    }
}

impl App for Store {
    fn find_collection_by_name_or_id(&self, name_or_id: &str) -> Result<&Collection, StoreError> {
        self.lookup(name_or_id)
            .ok_or_else(|| StoreError::CollectionNotFound {
                name: name_or_id.to_string(),
            })
    }

    fn find_collection(&self, name_or_id: &str) -> Option<&Collection> {
        self.lookup(name_or_id)
    }

    fn save(&mut self, collection: Collection) -> Result<(), StoreError> {
        collection.validate()?;
        self.check_relation_targets(&collection)?;

        if let Some(existing) = self.collections.get(&collection.name) {
            if existing.id != collection.id {
                return Err(StoreError::DuplicateCollection {
                    name: collection.name,
                });
            }
        }

        // Re-saving an id under a new name drops the old binding.
        let prior_name = self
            .collections
            .iter()
            .find(|(_, c)| c.id == collection.id)
            .map(|(name, _)| name.clone());
        if let Some(prior) = prior_name {
            if prior != collection.name {
                self.collections.remove(&prior);
            }
        }
        self.collections.insert(collection.name.clone(), collection);

        Ok(())
    }
}
