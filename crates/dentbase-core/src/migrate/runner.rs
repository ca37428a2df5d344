use crate::{
    migrate::{MigrationError, MigrationKey, MigrationSet},
    obs::{EventSink, MigrationEvent, NullSink},
    store::Store,
};

///
/// ApplyOutcome
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ApplyOutcome {
    pub applied: usize,
    pub skipped: usize,
}

///
/// RevertOutcome
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RevertOutcome {
    pub reverted: usize,
}

///
/// Runner
///
/// Applies a migration set against a store, reporting progress through an
/// event sink.
///

pub struct Runner<'a> {
    sink: &'a dyn EventSink,
}

impl Default for Runner<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner<'static> {
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: &NullSink }
    }
}

impl<'a> Runner<'a> {
    #[must_use]
    pub const fn with_sink(sink: &'a dyn EventSink) -> Self {
        Self { sink }
    }

    /// Apply every pending migration in ascending key order.
    ///
    /// Already-applied keys are skipped; the first failure aborts the run
    /// with nothing recorded for the failed migration. The snapshot is
    /// persisted after each applied migration, so a crash never forgets work
    /// that already ran.
    pub fn apply(
        &self,
        store: &mut Store,
        set: &MigrationSet,
    ) -> Result<ApplyOutcome, MigrationError> {
        let mut outcome = ApplyOutcome::default();

        for migration in set {
            if store.is_applied(migration.key) {
                self.sink.record(MigrationEvent::Skipped {
                    key: migration.key,
                    name: migration.name,
                });
                outcome.skipped += 1;
                continue;
            }

            (migration.up)(store)?;
            store.mark_applied(migration.key, migration.name);
            store.persist()?;

            self.sink.record(MigrationEvent::Applied {
                key: migration.key,
                name: migration.name,
            });
            outcome.applied += 1;
        }

        Ok(outcome)
    }

    /// Revert up to `steps` applied migrations in descending key order.
    ///
    /// Runs each migration's down action, then drops its ledger entry. A
    /// `noop` down leaves the collection in place: rolling back a collection
    /// creation is a documented limitation of this schema log, not an
    /// oversight.
    pub fn revert(
        &self,
        store: &mut Store,
        set: &MigrationSet,
        steps: usize,
    ) -> Result<RevertOutcome, MigrationError> {
        let mut keys: Vec<MigrationKey> = store.applied().map(|a| a.key).collect();
        keys.reverse();

        let mut outcome = RevertOutcome::default();
        for key in keys.into_iter().take(steps) {
            let migration = set.get(key).ok_or(MigrationError::UnknownKey(key))?;

            (migration.down)(store)?;
            store.mark_reverted(key);
            store.persist()?;

            self.sink.record(MigrationEvent::Reverted {
                key,
                name: migration.name,
            });
            outcome.reverted += 1;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::App,
        migrate::{self, Migration},
        store::StoreError,
    };
    use dentbase_schema::{collection::Collection, field::Field};
    use std::cell::RefCell;

    fn create_regions(app: &mut dyn App) -> Result<(), MigrationError> {
        let mut collection = Collection::base("regions");
        collection.fields.add(Field::text("label").required());
        app.save(collection)?;

        Ok(())
    }

    fn create_sites(app: &mut dyn App) -> Result<(), MigrationError> {
        let region = app.find_collection_by_name_or_id("regions")?.id;

        let mut collection = Collection::base("sites");
        collection.fields.add(Field::relation("region", region).required());
        app.save(collection)?;

        Ok(())
    }

    fn needs_missing(app: &mut dyn App) -> Result<(), MigrationError> {
        app.find_collection_by_name_or_id("nowhere")?;

        Ok(())
    }

    fn set(migrations: Vec<Migration>) -> MigrationSet {
        MigrationSet::new(migrations).expect("test keys are ascending")
    }

    fn dental_style(key: u64, name: &'static str, up: crate::migrate::MigrationFn) -> Migration {
        Migration {
            key: MigrationKey::new(key),
            name,
            up,
            down: migrate::noop,
        }
    }

    #[test]
    fn apply_runs_in_order_and_reapply_is_a_no_op() {
        let mut store = Store::in_memory();
        let set = set(vec![
            dental_style(1, "regions", create_regions),
            dental_style(2, "sites", create_sites),
        ]);
        let runner = Runner::new();

        let first = runner.apply(&mut store, &set).expect("first run applies");
        assert_eq!(first, ApplyOutcome {
            applied: 2,
            skipped: 0
        });
        assert!(store.find_collection("sites").is_some());

        let second = runner.apply(&mut store, &set).expect("second run skips");
        assert_eq!(second, ApplyOutcome {
            applied: 0,
            skipped: 2
        });
    }

    #[test]
    fn apply_fails_fast_and_keeps_earlier_work() {
        let mut store = Store::in_memory();
        let set = set(vec![
            dental_style(1, "regions", create_regions),
            dental_style(2, "broken", needs_missing),
            dental_style(3, "sites", create_sites),
        ]);

        let err = Runner::new()
            .apply(&mut store, &set)
            .expect_err("missing dependency must abort the run");
        assert!(matches!(
            err,
            MigrationError::Store(StoreError::CollectionNotFound { ref name }) if name == "nowhere"
        ));

        assert!(store.is_applied(MigrationKey::new(1)), "applied work stays");
        assert!(!store.is_applied(MigrationKey::new(2)));
        assert!(
            store.find_collection("sites").is_none(),
            "later migrations must not run after a failure"
        );
    }

    #[test]
    fn revert_unmarks_but_noop_downs_keep_collections() {
        let mut store = Store::in_memory();
        let set = set(vec![
            dental_style(1, "regions", create_regions),
            dental_style(2, "sites", create_sites),
        ]);
        let runner = Runner::new();
        runner.apply(&mut store, &set).expect("apply");

        let outcome = runner.revert(&mut store, &set, 1).expect("revert one step");
        assert_eq!(outcome.reverted, 1);
        assert!(!store.is_applied(MigrationKey::new(2)));
        assert!(store.is_applied(MigrationKey::new(1)));
        assert!(
            store.find_collection("sites").is_some(),
            "noop down leaves the collection behind"
        );

        // reverting more steps than remain reverts what exists and stops
        let outcome = runner.revert(&mut store, &set, 10).expect("revert rest");
        assert_eq!(outcome.reverted, 1);
        assert!(store.applied().next().is_none());
    }

    struct RecordingSink {
        lines: RefCell<Vec<String>>,
    }

    impl EventSink for RecordingSink {
        fn record(&self, event: MigrationEvent) {
            let line = match event {
                MigrationEvent::Applied { key, name } => format!("applied {key} {name}"),
                MigrationEvent::Skipped { key, name } => format!("skipped {key} {name}"),
                MigrationEvent::Reverted { key, name } => format!("reverted {key} {name}"),
            };
            self.lines.borrow_mut().push(line);
        }
    }

    #[test]
    fn runner_reports_lifecycle_through_the_sink() {
        let sink = RecordingSink {
            lines: RefCell::new(Vec::new()),
        };
        let mut store = Store::in_memory();
        let set = set(vec![dental_style(1, "regions", create_regions)]);

        let runner = Runner::with_sink(&sink);
        runner.apply(&mut store, &set).expect("apply");
        runner.apply(&mut store, &set).expect("re-apply");
        runner.revert(&mut store, &set, 1).expect("revert");

        assert_eq!(sink.lines.borrow().as_slice(), &[
            "applied 1 regions".to_string(),
            "skipped 1 regions".to_string(),
            "reverted 1 regions".to_string(),
        ]);
    }
}
