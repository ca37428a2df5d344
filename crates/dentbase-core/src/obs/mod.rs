//! Observability: migration lifecycle events and point-in-time status
//! reports. Engine logic never formats or prints; everything flows through
//! the sink boundary.

mod report;
mod sink;

pub use report::{
    CollectionSummary, FieldSummary, PendingMigration, StatusReport, status_report,
};
pub use sink::{EventSink, MigrationEvent, NullSink};
