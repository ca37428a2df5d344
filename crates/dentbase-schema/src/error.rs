use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// ErrorTree
///
/// Accumulates validation failures so one pass reports every problem
/// instead of stopping at the first.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    errors: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn merge(&mut self, mut other: Self) {
        self.errors.append(&mut other.errors);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the tree, returning `Ok` when nothing was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Record a formatted validation error into an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// NameError
///

#[derive(Debug, ThisError)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("name '{0}' exceeds max length {1}")]
    TooLong(String, usize),

    #[error("name '{0}' must be lowercase ASCII snake_case")]
    NotSnakeCase(String),

    #[error("name '{0}' is reserved")]
    Reserved(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_resolves_ok() {
        let errs = ErrorTree::new();
        assert!(errs.result().is_ok());
    }

    #[test]
    fn recorded_errors_render_one_per_line() {
        let mut errs = ErrorTree::new();
        err!(errs, "first {}", "problem");
        err!(errs, "second problem");

        let tree = errs.result().expect_err("non-empty tree must fail");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.to_string(), "first problem\nsecond problem");
    }

    #[test]
    fn merge_appends_in_order() {
        let mut a = ErrorTree::new();
        a.add("one");
        let mut b = ErrorTree::new();
        b.add("two");
        a.merge(b);

        assert_eq!(a.to_string(), "one\ntwo");
    }
}
