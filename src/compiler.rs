//! Schema compilation.
//!
//! Compiling a schema tree is the only expensive step in the pipeline; the
//! resulting [`CompiledSchema`] is immutable and meant to be built once and
//! shared across every subsequent validation call.

use std::sync::Arc;

use serde_json::Value;

use crate::engine::{JsonSchemaEngine, StructuralEngine, StructuralViolation};

/// Errors raised when a schema tree cannot be compiled.
///
/// Schema errors are fatal: the caller must fix the schema, there is nothing
/// to report against a document.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema tree violates the schema language's own meta-rules.
    #[error("schema failed to compile: {reason}")]
    Compile {
        /// Backend-reported reason the schema was rejected.
        reason: String,
    },
}

/// An immutable, reusable validator compiled from a schema tree.
///
/// Cloning is cheap (the backend is `Arc`-shared) and a single instance is
/// safe for concurrent read-only use by any number of simultaneous
/// validation calls.
#[derive(Clone)]
pub struct CompiledSchema {
    engine: Arc<dyn StructuralEngine>,
}

impl CompiledSchema {
    /// Wraps an already-compiled backend.
    ///
    /// This is the seam for swapping the structural engine: anything
    /// implementing [`StructuralEngine`] slots in without changing the
    /// reference-integrity pass or the result shape.
    pub fn from_engine(engine: Arc<dyn StructuralEngine>) -> Self {
        Self { engine }
    }

    /// Returns the stable logical name of the backing engine.
    pub fn backend(&self) -> &'static str {
        self.engine.name()
    }

    /// Runs the structural check, reporting all violations.
    pub fn check(&self, document: &Value) -> Vec<StructuralViolation> {
        self.engine.check(document)
    }
}

// CompiledSchema must stay shareable across validation calls.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<CompiledSchema>();
    assert_sync::<CompiledSchema>();
};

/// Compiles a schema tree with the default backend.
///
/// Compilation is pure: identical schema trees yield functionally equivalent
/// validators.
///
/// # Errors
///
/// Returns [`SchemaError`] if the schema tree is structurally invalid.
///
/// # Example
///
/// ```rust
/// use crosscheck::compile;
/// use serde_json::json;
///
/// let compiled = compile(&json!({"type": "object"})).unwrap();
/// assert_eq!(compiled.backend(), "jsonschema");
/// ```
pub fn compile(schema: &Value) -> Result<CompiledSchema, SchemaError> {
    let engine = JsonSchemaEngine::compile(schema)?;
    Ok(CompiledSchema::from_engine(Arc::new(engine)))
}
