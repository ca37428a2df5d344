//! Collection validation: staged local checks with aggregated errors.

mod field;
mod naming;

use crate::{collection::Collection, err, error::ErrorTree};
use std::collections::BTreeSet;

/// Run collection-local validation in a deterministic order.
pub(crate) fn validate_collection(collection: &Collection) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    // Phase 1: identifiers.
    naming::validate_collection_name(&collection.name, &mut errs);
    for f in &collection.fields {
        naming::validate_field_name(&collection.name, &f.name, &mut errs);
    }

    // Phase 2: field-name uniqueness.
    let mut seen = BTreeSet::new();
    for f in &collection.fields {
        if !seen.insert(f.name.as_str()) {
            err!(
                errs,
                "collection '{}': duplicate field name '{}'",
                collection.name,
                f.name
            );
        }
    }

    // Phase 3: per-kind constraint coherence.
    for f in &collection.fields {
        field::validate_field(&collection.name, f, &mut errs);
    }

    errs.result()
}
