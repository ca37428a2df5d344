pub mod app;
pub mod migrate;
pub mod obs;
pub mod store;

use crate::{migrate::MigrationError, store::StoreError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        app::App,
        migrate::{
            self, Migration, MigrationError, MigrationFn, MigrationKey, MigrationSet, Runner,
        },
        obs::{EventSink, MigrationEvent, NullSink},
        store::{Store, StoreError},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Migration(#[from] MigrationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
