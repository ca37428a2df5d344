use crate::migrate::MigrationKey;

///
/// MigrationEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MigrationEvent {
    Applied {
        key: MigrationKey,
        name: &'static str,
    },
    Skipped {
        key: MigrationKey,
        name: &'static str,
    },
    Reverted {
        key: MigrationKey,
        name: &'static str,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: MigrationEvent);
}

///
/// NullSink
/// Default sink when the caller does not care about progress.
///

pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _: MigrationEvent) {}
}
