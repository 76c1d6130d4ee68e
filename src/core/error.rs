//! Constraint failure values.
//!
//! Failures are ordinary values, not exceptional control flow: guard
//! evaluation returns `Option<ConstraintErrors>` (`None` meaning "no
//! failures") and only the `commit` boundary turns a present aggregate
//! into a propagated error.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single named constraint failure with a human-readable message.
///
/// # Example
///
/// ```rust
/// use trellis::core::ConstraintError;
///
/// let error = ConstraintError::new("not-an-editor", "the user cannot edit documents");
/// assert_eq!(error.name(), "not-an-editor");
/// assert_eq!(error.to_string(), "not-an-editor: the user cannot edit documents");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Error)]
#[error("{name}: {message}")]
pub struct ConstraintError {
    name: String,
    message: String,
}

impl ConstraintError {
    /// Create a failure with a name and a message.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The failure's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An ordered aggregate of one or more constraint failures.
///
/// Never empty: the only constructor, [`ConstraintErrors::from_errors`],
/// returns `None` for an empty input. Callers represent "no failures" as
/// `Option::<ConstraintErrors>::None`, never as an empty aggregate.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ConstraintErrors {
    errors: Vec<ConstraintError>,
}

impl ConstraintErrors {
    /// Build an aggregate from collected failures, or `None` if there
    /// are no failures to report.
    pub fn from_errors(errors: Vec<ConstraintError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Iterate the failures in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConstraintError> {
        self.errors.iter()
    }

    /// Number of failures (always at least one).
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for slice-like API symmetry.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ConstraintErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConstraintErrors {}

impl IntoIterator for ConstraintErrors {
    type Item = ConstraintError;
    type IntoIter = std::vec::IntoIter<ConstraintError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintErrors {
    type Item = &'a ConstraintError;
    type IntoIter = std::slice::Iter<'a, ConstraintError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// What a single constraint invocation signals on failure.
///
/// A plain constraint signals exactly one [`ConstraintError`]; a
/// constraint wrapping a nested combinator may signal a whole aggregate,
/// which [`resolve_constraints`](crate::core::resolve_constraints)
/// flattens into its running list.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ConstraintViolation {
    #[error(transparent)]
    Single(#[from] ConstraintError),

    #[error(transparent)]
    Aggregate(#[from] ConstraintErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_aggregate() {
        assert_eq!(ConstraintErrors::from_errors(Vec::new()), None);
    }

    #[test]
    fn aggregate_preserves_order() {
        let errors = ConstraintErrors::from_errors(vec![
            ConstraintError::new("first", "a"),
            ConstraintError::new("second", "b"),
        ])
        .unwrap();

        let names: Vec<&str> = errors.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn display_joins_messages() {
        let errors = ConstraintErrors::from_errors(vec![
            ConstraintError::new("a", "one"),
            ConstraintError::new("b", "two"),
        ])
        .unwrap();

        assert_eq!(errors.to_string(), "a: one; b: two");
    }

    #[test]
    fn violation_wraps_both_shapes() {
        let single: ConstraintViolation = ConstraintError::new("x", "boom").into();
        assert!(matches!(single, ConstraintViolation::Single(_)));

        let aggregate: ConstraintViolation =
            ConstraintErrors::from_errors(vec![ConstraintError::new("x", "boom")])
                .unwrap()
                .into();
        assert!(matches!(aggregate, ConstraintViolation::Aggregate(_)));
    }

    #[test]
    fn error_serializes_correctly() {
        let error = ConstraintError::new("quota", "limit reached");
        let json = serde_json::to_string(&error).unwrap();
        let back: ConstraintError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, back);
    }
}
