//! Structural engine backed by the `jsonschema` crate.
//!
//! Schemas compile under JSON Schema Draft 2020-12 with format assertions
//! (`date-time`, `uri`, `email`, ...) enabled, matching the behavior callers
//! of this pipeline rely on for string-format constraints.

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::compiler::SchemaError;
use crate::engine::{StructuralEngine, StructuralViolation};
use crate::pointer::JsonPointer;

/// A structural validator compiled from a JSON Schema tree.
///
/// The compiled validator is immutable and `Send + Sync`; one instance can
/// serve any number of concurrent `check` calls.
pub struct JsonSchemaEngine {
    validator: Validator,
}

impl JsonSchemaEngine {
    /// Compiles a schema tree into a reusable engine.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if the tree is not a valid Draft
    /// 2020-12 schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crosscheck::JsonSchemaEngine;
    /// use serde_json::json;
    ///
    /// let engine = JsonSchemaEngine::compile(&json!({"type": "object"})).unwrap();
    ///
    /// assert!(JsonSchemaEngine::compile(&json!({"type": "nonsense"})).is_err());
    /// ```
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        let mut options = jsonschema::options();
        options.with_draft(Draft::Draft202012);
        options.should_validate_formats(true);

        let validator = options.build(schema).map_err(|e| SchemaError::Compile {
            reason: e.to_string(),
        })?;

        Ok(Self { validator })
    }
}

impl StructuralEngine for JsonSchemaEngine {
    fn name(&self) -> &'static str {
        "jsonschema"
    }

    fn check(&self, document: &Value) -> Vec<StructuralViolation> {
        self.validator
            .iter_errors(document)
            .map(|error| StructuralViolation {
                // instance_path is well-formed pointer text by construction
                pointer: JsonPointer::parse(&error.instance_path.to_string())
                    .unwrap_or_default(),
                schema_pointer: error.schema_path.to_string(),
                message: error.to_string(),
            })
            .collect()
    }
}
