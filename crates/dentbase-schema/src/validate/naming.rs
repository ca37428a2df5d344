use crate::{
    MAX_COLLECTION_NAME_LEN, MAX_FIELD_NAME_LEN, RESERVED_FIELD_NAMES, err,
    error::{ErrorTree, NameError},
};

/// Ensure a schema identifier is non-empty lowercase snake_case within `max_len`.
fn validate_ident(name: &str, max_len: usize) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > max_len {
        return Err(NameError::TooLong(name.to_string(), max_len));
    }

    let bytes = name.as_bytes();
    if !bytes[0].is_ascii_lowercase() {
        return Err(NameError::NotSnakeCase(name.to_string()));
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'_')
    {
        return Err(NameError::NotSnakeCase(name.to_string()));
    }

    Ok(())
}

pub(crate) fn validate_collection_name(name: &str, errs: &mut ErrorTree) {
    if let Err(e) = validate_ident(name, MAX_COLLECTION_NAME_LEN) {
        err!(errs, "collection name: {e}");
    }
}

pub(crate) fn validate_field_name(collection: &str, name: &str, errs: &mut ErrorTree) {
    if let Err(e) = validate_ident(name, MAX_FIELD_NAME_LEN) {
        err!(errs, "collection '{collection}': field name: {e}");
    }
    if RESERVED_FIELD_NAMES.contains(&name) {
        err!(
            errs,
            "collection '{collection}': field {}",
            NameError::Reserved(name.to_string())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_empty_and_oversized_names() {
        assert!(validate_ident("", 64).is_err(), "empty identifiers should fail");
        let long = "a".repeat(65);
        assert!(
            validate_ident(&long, 64).is_err(),
            "oversized identifiers should fail"
        );
    }

    #[test]
    fn rejects_non_snake_case() {
        for bad in ["Organizations", "9lives", "_hidden", "geo-address", "naïve"] {
            assert!(
                validate_ident(bad, 64).is_err(),
                "identifier '{bad}' should fail"
            );
        }
    }

    #[test]
    fn accepts_snake_case_identifier() {
        assert!(validate_ident("treatments_catalog", 64).is_ok());
        assert!(validate_ident("x1", 64).is_ok());
    }

    #[test]
    fn reserved_names_are_flagged_per_field() {
        let mut errs = ErrorTree::new();
        validate_field_name("patients", "created", &mut errs);
        let rendered = errs.result().expect_err("reserved name must fail").to_string();
        assert!(
            rendered.contains("reserved"),
            "expected reserved error, got: {rendered}"
        );
    }

    proptest! {
        #[test]
        fn snake_case_identifiers_always_pass(name in "[a-z][a-z0-9_]{0,62}") {
            prop_assert!(validate_ident(&name, MAX_COLLECTION_NAME_LEN).is_ok());
        }

        #[test]
        fn identifiers_with_uppercase_always_fail(name in "[a-z]{0,8}[A-Z][a-zA-Z0-9_]{0,8}") {
            prop_assert!(validate_ident(&name, MAX_COLLECTION_NAME_LEN).is_err());
        }
    }
}
