//! Validation error types.
//!
//! This module provides [`ValidationError`] for single report-only findings and
//! [`ValidationErrors`] for accumulating multiple findings across passes.

use std::fmt::{self, Display};

use serde_json::{json, Value};
use stillwater::prelude::*;

use crate::pointer::JsonPointer;

/// Identifies which validation pass produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourcePass {
    /// The compiled structural validator (schema constraints).
    Structural,
    /// The type-reference integrity scan.
    ReferenceIntegrity,
}

impl Display for SourcePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePass::Structural => write!(f, "structural"),
            SourcePass::ReferenceIntegrity => write!(f, "reference-integrity"),
        }
    }
}

/// A single validation error with full context.
///
/// `ValidationError` captures all relevant information about a finding:
/// - **pointer**: Where in the document the error occurred
/// - **pass**: Which validation pass reported it
/// - **message**: Human-readable description of the failure
/// - **details**: Optional structured payload (e.g. the unresolved reference)
///
/// Errors are never raised; they are collected into a
/// [`ValidationResult`](crate::ValidationResult) and the validating call
/// itself succeeds.
///
/// # Example
///
/// ```rust
/// use crosscheck::{JsonPointer, SourcePass, ValidationError};
/// use serde_json::json;
///
/// let error = ValidationError::new(
///     JsonPointer::root().push_key("item").push_key("type"),
///     SourcePass::ReferenceIntegrity,
///     "must be reference to defined type",
/// )
/// .with_details(json!({"reference": "#/components/types/Bar"}));
///
/// assert_eq!(error.pass, SourcePass::ReferenceIntegrity);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The pointer to the value that failed validation.
    pub pointer: JsonPointer,
    /// The pass that reported the error.
    pub pass: SourcePass,
    /// Human-readable error message.
    pub message: String,
    /// Structured payload with pass-specific context.
    pub details: Option<Value>,
}

impl ValidationError {
    /// Creates a new validation error with the given pointer, pass, and message.
    pub fn new(pointer: JsonPointer, pass: SourcePass, message: impl Into<String>) -> Self {
        Self {
            pointer,
            pass,
            message: message.into(),
            details: None,
        }
    }

    /// Sets the details payload and returns self for chaining.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Renders this error as a plain JSON object, suitable for callers that
    /// emit machine-readable diagnostics.
    pub fn to_json(&self) -> Value {
        json!({
            "pointer": self.pointer.to_string(),
            "pass": self.pass.to_string(),
            "message": self.message,
            "details": self.details,
        })
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pointer_str = if self.pointer.is_root() {
            "(root)".to_string()
        } else {
            self.pointer.to_string()
        };

        write!(f, "{}: {}", pointer_str, self.message)?;

        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ValidationError is Send + Sync since all fields are owned types.
// These assertions keep that true if the fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` to guarantee that
/// at least one error is present. This is essential for use with
/// `Validation<T, ValidationErrors>` since a failure must carry at least one
/// error.
///
/// # Combining Errors
///
/// `ValidationErrors` implements `Semigroup`, allowing errors from multiple
/// passes to be combined while preserving order:
///
/// ```rust
/// use crosscheck::{JsonPointer, SourcePass, ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let structural = ValidationErrors::single(ValidationError::new(
///     JsonPointer::from_key("name"),
///     SourcePass::Structural,
///     "must be string",
/// ));
/// let reference = ValidationErrors::single(ValidationError::new(
///     JsonPointer::from_key("type"),
///     SourcePass::ReferenceIntegrity,
///     "must be reference to defined type",
/// ));
///
/// let combined = structural.combine(reference);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().pass, SourcePass::Structural);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Creates a `ValidationErrors` from a `Vec<ValidationError>`.
    ///
    /// Returns `None` if the vec is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns all errors at the specified pointer.
    pub fn at_pointer(&self, pointer: &JsonPointer) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.pointer == pointer).collect()
    }

    /// Returns all errors reported by the specified pass.
    pub fn from_pass(&self, pass: SourcePass) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.pass == pass).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<ValidationError> {
        &self.0
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// ValidationErrors is Send + Sync since ValidationError is Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new(
            JsonPointer::from_key("name"),
            SourcePass::Structural,
            "must be string",
        );

        assert_eq!(error.pointer, JsonPointer::from_key("name"));
        assert_eq!(error.pass, SourcePass::Structural);
        assert_eq!(error.message, "must be string");
        assert!(error.details.is_none());
    }

    #[test]
    fn test_validation_error_builder() {
        let error = ValidationError::new(
            JsonPointer::from_key("type"),
            SourcePass::ReferenceIntegrity,
            "must be reference to defined type",
        )
        .with_details(json!({"reference": "#/components/types/Bar"}));

        assert_eq!(
            error.details,
            Some(json!({"reference": "#/components/types/Bar"}))
        );
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new(
            JsonPointer::from_key("item").push_key("type"),
            SourcePass::ReferenceIntegrity,
            "must be reference to defined type",
        )
        .with_details(json!({"reference": "#/x"}));

        let display = error.to_string();
        assert!(display.contains("/item/type: must be reference to defined type"));
        assert!(display.contains("#/x"));
    }

    #[test]
    fn test_validation_error_display_root() {
        let error =
            ValidationError::new(JsonPointer::root(), SourcePass::Structural, "must be object");
        assert!(error.to_string().contains("(root): must be object"));
    }

    #[test]
    fn test_validation_error_to_json() {
        let error = ValidationError::new(
            JsonPointer::from_key("type"),
            SourcePass::ReferenceIntegrity,
            "must be reference to defined type",
        )
        .with_details(json!({"reference": "#/components/types/Bar"}));

        let rendered = error.to_json();
        assert_eq!(rendered["pointer"], "/type");
        assert_eq!(rendered["pass"], "reference-integrity");
        assert_eq!(rendered["message"], "must be reference to defined type");
        assert_eq!(rendered["details"]["reference"], "#/components/types/Bar");
    }

    #[test]
    fn test_validation_errors_single() {
        let error = ValidationError::new(JsonPointer::root(), SourcePass::Structural, "test");
        let errors = ValidationErrors::single(error.clone());

        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first(), &error);
    }

    #[test]
    fn test_validation_errors_from_vec() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());

        let errors = ValidationErrors::from_vec(vec![ValidationError::new(
            JsonPointer::root(),
            SourcePass::Structural,
            "test",
        )])
        .unwrap();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validation_errors_combine_preserves_order() {
        let first = ValidationErrors::single(ValidationError::new(
            JsonPointer::from_key("a"),
            SourcePass::Structural,
            "error 1",
        ));
        let second = ValidationErrors::single(ValidationError::new(
            JsonPointer::from_key("b"),
            SourcePass::ReferenceIntegrity,
            "error 2",
        ));

        let combined = first.combine(second);
        assert_eq!(combined.len(), 2);

        let messages: Vec<_> = combined.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["error 1", "error 2"]);
    }

    #[test]
    fn test_validation_errors_at_pointer() {
        let pointer_a = JsonPointer::from_key("a");
        let pointer_b = JsonPointer::from_key("b");

        let errors = ValidationErrors::single(ValidationError::new(
            pointer_a.clone(),
            SourcePass::Structural,
            "error 1",
        ))
        .combine(ValidationErrors::single(ValidationError::new(
            pointer_a.clone(),
            SourcePass::ReferenceIntegrity,
            "error 2",
        )))
        .combine(ValidationErrors::single(ValidationError::new(
            pointer_b.clone(),
            SourcePass::Structural,
            "error 3",
        )));

        assert_eq!(errors.at_pointer(&pointer_a).len(), 2);
        assert_eq!(errors.at_pointer(&pointer_b).len(), 1);
    }

    #[test]
    fn test_validation_errors_from_pass() {
        let errors = ValidationErrors::single(ValidationError::new(
            JsonPointer::from_key("a"),
            SourcePass::Structural,
            "error 1",
        ))
        .combine(ValidationErrors::single(ValidationError::new(
            JsonPointer::from_key("b"),
            SourcePass::ReferenceIntegrity,
            "error 2",
        )));

        assert_eq!(errors.from_pass(SourcePass::Structural).len(), 1);
        assert_eq!(errors.from_pass(SourcePass::ReferenceIntegrity).len(), 1);
    }

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors::single(ValidationError::new(
            JsonPointer::from_key("name"),
            SourcePass::Structural,
            "required",
        ))
        .combine(ValidationErrors::single(ValidationError::new(
            JsonPointer::from_key("type"),
            SourcePass::ReferenceIntegrity,
            "must be reference to defined type",
        )));

        let display = errors.to_string();
        assert!(display.contains("2 error(s)"));
        assert!(display.contains("/name: required"));
        assert!(display.contains("/type: must be reference to defined type"));
    }

    #[test]
    fn test_semigroup_associativity() {
        let e1 = ValidationErrors::single(ValidationError::new(
            JsonPointer::root(),
            SourcePass::Structural,
            "1",
        ));
        let e2 = ValidationErrors::single(ValidationError::new(
            JsonPointer::root(),
            SourcePass::Structural,
            "2",
        ));
        let e3 = ValidationErrors::single(ValidationError::new(
            JsonPointer::root(),
            SourcePass::ReferenceIntegrity,
            "3",
        ));

        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        let right = e1.combine(e2.combine(e3));

        let left_msgs: Vec<_> = left.iter().map(|e| &e.message).collect();
        let right_msgs: Vec<_> = right.iter().map(|e| &e.message).collect();
        assert_eq!(left_msgs, right_msgs);
    }
}
