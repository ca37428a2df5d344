use crate::{
    err,
    error::ErrorTree,
    field::{Field, FieldKind},
};
use std::collections::BTreeSet;

/// Check one field's constraint payload for internal coherence.
pub(crate) fn validate_field(collection: &str, field: &Field, errs: &mut ErrorTree) {
    let name = field.name.as_str();

    match &field.kind {
        FieldKind::Text { max } => {
            if max == &Some(0) {
                err!(errs, "collection '{collection}', field '{name}': max length must be at least 1");
            }
        }

        FieldKind::Number { min, max } => {
            for (label, bound) in [("min", min), ("max", max)] {
                if let Some(v) = bound {
                    if v.is_nan() {
                        err!(errs, "collection '{collection}', field '{name}': {label} must be a number");
                    }
                }
            }
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    err!(
                        errs,
                        "collection '{collection}', field '{name}': min {min} exceeds max {max}"
                    );
                }
            }
        }

        FieldKind::Select { values, max_select } => {
            if values.is_empty() {
                err!(errs, "collection '{collection}', field '{name}': select declares no values");
            }
            let mut seen = BTreeSet::new();
            for value in values {
                if value.is_empty() {
                    err!(errs, "collection '{collection}', field '{name}': empty select value");
                } else if !seen.insert(value.as_str()) {
                    err!(
                        errs,
                        "collection '{collection}', field '{name}': duplicate select value '{value}'"
                    );
                }
            }
            validate_max_select(collection, name, *max_select, errs);
            if let Some(n) = max_select {
                if *n as usize > values.len() && !values.is_empty() {
                    err!(
                        errs,
                        "collection '{collection}', field '{name}': max_select {n} exceeds the {} declared values",
                        values.len()
                    );
                }
            }
        }

        FieldKind::Relation { max_select, .. } => {
            validate_max_select(collection, name, *max_select, errs);
        }

        FieldKind::File {
            max_select,
            max_size,
            mime_types,
            thumbs,
            ..
        } => {
            validate_max_select(collection, name, *max_select, errs);
            if max_size == &Some(0) {
                err!(errs, "collection '{collection}', field '{name}': max size must be at least 1 byte");
            }
            for mime in mime_types {
                if mime.is_empty() {
                    err!(errs, "collection '{collection}', field '{name}': empty MIME type");
                }
            }
            for thumb in thumbs {
                if !is_thumb_size(thumb) {
                    err!(
                        errs,
                        "collection '{collection}', field '{name}': thumb '{thumb}' is not WxH"
                    );
                }
            }
        }

        FieldKind::Bool | FieldKind::Date | FieldKind::Email | FieldKind::GeoPoint | FieldKind::Json => {}
    }
}

fn validate_max_select(collection: &str, name: &str, max_select: Option<u32>, errs: &mut ErrorTree) {
    if max_select == Some(0) {
        err!(errs, "collection '{collection}', field '{name}': max_select must be at least 1");
    }
}

// A thumb size is `<width>x<height>` with both sides positive.
fn is_thumb_size(thumb: &str) -> bool {
    let Some((w, h)) = thumb.split_once('x') else {
        return false;
    };
    matches!((w.parse::<u32>(), h.parse::<u32>()), (Ok(w), Ok(h)) if w > 0 && h > 0)
}
