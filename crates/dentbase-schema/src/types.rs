use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// FieldType
///
/// Flat discriminant for every field kind the platform understands.
/// Constraint payloads live on [`crate::field::FieldKind`].
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldType {
    Bool,
    Date,
    Email,
    File,
    GeoPoint,
    Json,
    Number,
    Relation,
    Select,
    Text,
}

impl FieldType {
    /// Whether rows of this field reference other collections.
    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(self, Self::Relation)
    }
}
