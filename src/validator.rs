//! Document validation: the structural pass plus the reference-integrity pass.
//!
//! Both passes always run — a document that already failed structural
//! validation still gets its type references checked — and their errors merge
//! into one result, structural findings first.

use rayon::prelude::*;
use serde_json::{json, Value};
use stillwater::prelude::*;
use stillwater::Validation;

use crate::compiler::CompiledSchema;
use crate::error::{SourcePass, ValidationError, ValidationErrors};
use crate::refs;
use crate::result::ValidationResult;

/// Runs the structural check, translating backend violations into the common
/// error shape.
fn structural_pass(
    document: &Value,
    schema: &CompiledSchema,
) -> Validation<(), ValidationErrors> {
    let errors: Vec<ValidationError> = schema
        .check(document)
        .into_iter()
        .map(|violation| {
            ValidationError::new(violation.pointer, SourcePass::Structural, violation.message)
                .with_details(json!({"schemaPath": violation.schema_pointer}))
        })
        .collect();

    match ValidationErrors::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Runs the reference-integrity scan.
fn reference_pass(document: &Value) -> Validation<(), ValidationErrors> {
    match ValidationErrors::from_vec(refs::check_type_references(document)) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Validates a document against a compiled schema.
///
/// Runs the structural check and the reference-integrity scan, merging their
/// findings into one [`ValidationResult`]. The call itself always succeeds;
/// findings are reported in the result, never raised. Validating the same
/// document twice against the same compiled schema yields identical results.
///
/// There is no internal shared mutable state, so callers may invoke any
/// number of validations concurrently against one `CompiledSchema`.
///
/// # Example
///
/// ```rust
/// use crosscheck::{compile, validate, SourcePass};
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {"name": {"type": "string"}}
/// });
/// let compiled = compile(&schema).unwrap();
///
/// let document = json!({
///     "name": 123,
///     "item": {"type": {"$ref": "#/components/types/Missing"}}
/// });
/// let result = validate(&document, &compiled);
///
/// assert!(!result.valid());
/// assert_eq!(result.errors()[0].pass, SourcePass::Structural);
/// assert_eq!(result.errors()[1].pass, SourcePass::ReferenceIntegrity);
/// ```
pub fn validate(document: &Value, schema: &CompiledSchema) -> ValidationResult {
    let merged = match (structural_pass(document, schema), reference_pass(document)) {
        (Validation::Success(()), Validation::Success(())) => Validation::Success(()),
        (Validation::Failure(errors), Validation::Success(()))
        | (Validation::Success(()), Validation::Failure(errors)) => Validation::Failure(errors),
        (Validation::Failure(structural), Validation::Failure(reference)) => {
            Validation::Failure(structural.combine(reference))
        }
    };

    ValidationResult::from_validation(merged)
}

/// Validates a batch of documents in parallel.
///
/// Results preserve input order and are identical to calling [`validate`] on
/// each document individually.
pub fn validate_all(documents: &[Value], schema: &CompiledSchema) -> Vec<ValidationResult> {
    documents
        .par_iter()
        .map(|document| validate(document, schema))
        .collect()
}
