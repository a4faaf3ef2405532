//! Structural validation engines.
//!
//! This module provides the [`StructuralEngine`] trait that decouples the
//! structural-validation backend from the rest of the pipeline. The
//! reference-integrity pass and the result shape are backend-agnostic; a
//! caller can plug in an alternative engine without touching either.

mod json_schema;

pub use json_schema::JsonSchemaEngine;

use serde_json::Value;

use crate::pointer::JsonPointer;

/// A single structural constraint violation reported by an engine.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralViolation {
    /// Pointer to the violating location in the document.
    pub pointer: JsonPointer,
    /// Pointer text within the schema that triggered the violation.
    pub schema_pointer: String,
    /// Human-readable description of the violation.
    pub message: String,
}

/// A compiled structural validator backend.
///
/// Implementations must report *every* violation in a document rather than
/// stopping at the first one; downstream consumers need the complete set in
/// a single pass. The `Send + Sync` bounds allow a compiled engine to be
/// shared read-only across any number of concurrent checks.
pub trait StructuralEngine: Send + Sync {
    /// Stable logical name identifying this backend (e.g. `"jsonschema"`).
    fn name(&self) -> &'static str;

    /// Checks a document against the compiled schema, reporting all
    /// violations in the order the backend discovers them.
    fn check(&self, document: &Value) -> Vec<StructuralViolation>;
}
