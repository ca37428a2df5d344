use crate::{
    migrate::{MigrationKey, MigrationSet},
    store::{AppliedMigration, Store},
};
use dentbase_schema::{
    collection::{Collection, CollectionKind},
    types::FieldType,
};
use serde::Serialize;

///
/// StatusReport
///
/// Point-in-time view of the store for endpoint/test plumbing: the applied
/// ledger, what the given set would still run, and a summary of every
/// collection.
///

#[derive(Clone, Debug, Serialize)]
pub struct StatusReport {
    pub applied: Vec<AppliedMigration>,
    pub pending: Vec<PendingMigration>,
    pub collections: Vec<CollectionSummary>,
}

///
/// PendingMigration
///

#[derive(Clone, Debug, Serialize)]
pub struct PendingMigration {
    pub key: MigrationKey,
    pub name: String,
}

///
/// CollectionSummary
///

#[derive(Clone, Debug, Serialize)]
pub struct CollectionSummary {
    pub name: String,
    pub kind: CollectionKind,
    pub fields: Vec<FieldSummary>,
}

///
/// FieldSummary
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldSummary {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,

    /// Relation target, resolved to a collection name where possible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Build a point-in-time status report.
#[must_use]
pub fn status_report(store: &Store, set: &MigrationSet) -> StatusReport {
    StatusReport {
        applied: store.applied().cloned().collect(),
        pending: set
            .iter()
            .filter(|m| !store.is_applied(m.key))
            .map(|m| PendingMigration {
                key: m.key,
                name: m.name.to_string(),
            })
            .collect(),
        collections: store.collections().map(|c| summarize(store, c)).collect(),
    }
}

fn summarize(store: &Store, collection: &Collection) -> CollectionSummary {
    CollectionSummary {
        name: collection.name.clone(),
        kind: collection.kind,
        fields: collection
            .fields
            .iter()
            .map(|f| FieldSummary {
                name: f.name.clone(),
                field_type: f.field_type(),
                required: f.required,
                target: f.kind.relation_target().map(|id| {
                    store
                        .collection_name(id)
                        .map_or_else(|| id.to_string(), ToString::to_string)
                }),
            })
            .collect(),
    }
}
