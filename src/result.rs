//! The final outcome of validating one document.

use std::fmt::{self, Display};

use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};

/// The merged outcome of both validation passes over a single document.
///
/// `valid` is true exactly when the error sequence is empty; the invariant is
/// enforced by construction, which is why the fields are private. Errors keep
/// the order they were reported in: structural errors first, then
/// reference-integrity errors in document traversal order.
///
/// A result with errors is still a *successful* validation call — findings
/// are reported, never raised.
///
/// # Example
///
/// ```rust
/// use crosscheck::{compile, validate};
/// use serde_json::json;
///
/// let schema = json!({"type": "object"});
/// let compiled = compile(&schema).unwrap();
///
/// let result = validate(&json!({}), &compiled);
/// assert!(result.valid());
/// assert!(result.errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds a result from an ordered error sequence. An empty sequence
    /// yields a valid result.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Builds a result from a `stillwater` validation outcome.
    pub fn from_validation(validation: Validation<(), ValidationErrors>) -> Self {
        match validation {
            Validation::Success(()) => Self::from_errors(Vec::new()),
            Validation::Failure(errors) => Self::from_errors(errors.into_vec()),
        }
    }

    /// Returns true when no pass reported an error.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Returns the ordered error sequence.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the result, returning the ordered error sequence.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts this result back into a `stillwater` validation outcome,
    /// for callers composing with applicative combinators.
    pub fn into_validation(self) -> Validation<(), ValidationErrors> {
        match ValidationErrors::from_vec(self.errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "document is valid")
        } else {
            writeln!(f, "document is invalid with {} error(s):", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "  {}. {}", i + 1, error)?;
            }
            Ok(())
        }
    }
}
