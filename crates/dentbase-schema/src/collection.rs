use crate::{error::ErrorTree, field::Field, validate};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ulid::Ulid;

///
/// CollectionId
///
/// ULID assigned when the collection is constructed; stable across saves
/// and snapshots. Rendered as the canonical 26-character string.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CollectionId(Ulid);

impl CollectionId {
    pub(crate) fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CollectionId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}

///
/// CollectionKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum CollectionKind {
    Auth,
    Base,
}

///
/// FieldList
///
/// Ordered field definitions; declaration order is preserved and meaningful.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    pub fn add(&mut self, field: Field) {
        self.fields.push(field);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Collection
///
/// A named, typed table definition in the platform schema.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub kind: CollectionKind,
    pub fields: FieldList,
}

impl Collection {
    fn new(name: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            id: CollectionId::generate(),
            name: name.into(),
            kind,
            fields: FieldList::default(),
        }
    }

    /// Start a regular data collection.
    #[must_use]
    pub fn base(name: impl Into<String>) -> Self {
        Self::new(name, CollectionKind::Base)
    }

    /// Start an auth collection. Only system bootstrap creates these.
    #[must_use]
    pub fn auth(name: impl Into<String>) -> Self {
        Self::new(name, CollectionKind::Auth)
    }

    /// Validate everything knowable from this collection alone.
    ///
    /// Relation targets are a store-wide invariant and are checked by the
    /// store at save time.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        validate::validate_collection(self)
    }
}
