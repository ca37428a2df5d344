mod runner;

pub use runner::{ApplyOutcome, RevertOutcome, Runner};

use crate::{app::App, store::StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// MigrationError
///

#[derive(Debug, ThisError)]
pub enum MigrationError {
    #[error("duplicate migration key {0}")]
    DuplicateKey(MigrationKey),

    #[error("migration keys must ascend: {prev} precedes {next}")]
    OutOfOrder {
        prev: MigrationKey,
        next: MigrationKey,
    },

    #[error("no migration with key {0} in the set")]
    UnknownKey(MigrationKey),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Schema-change action run against the host app.
pub type MigrationFn = fn(&mut dyn App) -> Result<(), MigrationError>;

/// Placeholder for rollbacks that are intentionally unimplemented.
pub fn noop(_: &mut dyn App) -> Result<(), MigrationError> {
    Ok(())
}

///
/// MigrationKey
///
/// Unix-second authoring timestamp; the total order migrations apply in.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MigrationKey(u64);

impl MigrationKey {
    #[must_use]
    pub const fn new(key: u64) -> Self {
        Self(key)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MigrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

///
/// Migration
///
/// One versioned unit of schema change: an `up` that applies it and a `down`
/// that reverts it (or `noop` where reverting is unimplemented).
///

#[derive(Clone, Copy)]
pub struct Migration {
    pub key: MigrationKey,
    pub name: &'static str,
    pub up: MigrationFn,
    pub down: MigrationFn,
}

impl fmt::Debug for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // fn pointers render as addresses; key + name identify a migration
        f.debug_struct("Migration")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

///
/// MigrationSet
///
/// Explicit, ordered, append-only list of migrations. Construction rejects
/// duplicate and non-ascending keys so ordering bugs surface before any
/// schema change runs. Registration and execution are separate, explicit
/// steps; nothing registers itself at load time.
///

#[derive(Debug)]
pub struct MigrationSet {
    migrations: Vec<Migration>,
}

impl MigrationSet {
    pub fn new(migrations: Vec<Migration>) -> Result<Self, MigrationError> {
        for pair in migrations.windows(2) {
            let (prev, next) = (pair[0].key, pair[1].key);
            if next == prev {
                return Err(MigrationError::DuplicateKey(next));
            }
            if next < prev {
                return Err(MigrationError::OutOfOrder { prev, next });
            }
        }

        Ok(Self { migrations })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Migration> {
        self.migrations.iter()
    }

    #[must_use]
    pub fn get(&self, key: MigrationKey) -> Option<&Migration> {
        self.migrations.iter().find(|m| m.key == key)
    }
}

impl<'a> IntoIterator for &'a MigrationSet {
    type Item = &'a Migration;
    type IntoIter = std::slice::Iter<'a, Migration>;

    fn into_iter(self) -> Self::IntoIter {
        self.migrations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn migration(key: u64) -> Migration {
        Migration {
            key: MigrationKey::new(key),
            name: "test",
            up: noop,
            down: noop,
        }
    }

    #[test]
    fn accepts_strictly_ascending_keys() {
        let set = MigrationSet::new(vec![migration(1), migration(2), migration(30)])
            .expect("ascending keys must construct");
        assert_eq!(set.len(), 3);
        assert!(set.get(MigrationKey::new(2)).is_some());
        assert!(set.get(MigrationKey::new(3)).is_none());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = MigrationSet::new(vec![migration(5), migration(5)])
            .expect_err("duplicate keys must fail");
        assert!(matches!(err, MigrationError::DuplicateKey(k) if k == MigrationKey::new(5)));
    }

    #[test]
    fn rejects_descending_keys() {
        let err = MigrationSet::new(vec![migration(9), migration(3)])
            .expect_err("descending keys must fail");
        assert!(matches!(
            err,
            MigrationError::OutOfOrder { prev, next }
                if prev == MigrationKey::new(9) && next == MigrationKey::new(3)
        ));
    }

    #[test]
    fn empty_set_is_valid() {
        let set = MigrationSet::new(Vec::new()).expect("empty set constructs");
        assert!(set.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ascending_unique_keys_always_construct(
                keys in proptest::collection::btree_set(any::<u64>(), 0..32)
            ) {
                let migrations: Vec<Migration> = keys.iter().map(|k| migration(*k)).collect();
                prop_assert!(MigrationSet::new(migrations).is_ok());
            }

            #[test]
            fn any_non_ascending_pair_is_rejected(a in any::<u64>(), b in any::<u64>()) {
                prop_assume!(a >= b);
                prop_assert!(MigrationSet::new(vec![migration(a), migration(b)]).is_err());
            }
        }
    }
}
