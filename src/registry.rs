//! Validator registry for compile-once, validate-many reuse.
//!
//! This module provides the [`ValidatorRegistry`] type that compiles named
//! schemas once and serves the immutable compiled validators to any number of
//! subsequent validation calls.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::compiler::{compile, CompiledSchema, SchemaError};
use crate::result::ValidationResult;
use crate::validator;

/// Type alias for the validator storage map.
type ValidatorMap = Arc<RwLock<IndexMap<String, Arc<CompiledSchema>>>>;

/// A thread-safe registry of compiled validators.
///
/// Registering a schema compiles it exactly once; every later validation
/// call against that name reuses the same immutable [`CompiledSchema`].
/// There is no hidden global state — callers construct a registry explicitly
/// and pass it (or clones of it) wherever validation happens.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// # Example
///
/// ```rust
/// use crosscheck::ValidatorRegistry;
/// use serde_json::json;
///
/// let registry = ValidatorRegistry::new();
/// registry.register("person", &json!({
///     "type": "object",
///     "properties": {"name": {"type": "string"}},
///     "required": ["name"]
/// })).unwrap();
///
/// let result = registry.validate("person", &json!({"name": "Alice"})).unwrap();
/// assert!(result.valid());
/// ```
pub struct ValidatorRegistry {
    validators: ValidatorMap,
}

impl ValidatorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            validators: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Compiles a schema tree and registers it under the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already taken,
    /// or `RegistryError::Schema` if the schema tree fails to compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crosscheck::ValidatorRegistry;
    /// use serde_json::json;
    ///
    /// let registry = ValidatorRegistry::new();
    /// registry.register("doc", &json!({"type": "object"})).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("doc", &json!({"type": "object"})).is_err());
    /// ```
    pub fn register(&self, name: impl Into<String>, schema: &Value) -> Result<(), RegistryError> {
        let name = name.into();
        let mut validators = self.validators.write();

        if validators.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let compiled = compile(schema)?;
        validators.insert(name, Arc::new(compiled));
        Ok(())
    }

    /// Retrieves a compiled validator by name.
    ///
    /// Returns `None` if no validator with the given name is registered.
    pub fn get(&self, name: &str) -> Option<Arc<CompiledSchema>> {
        self.validators.read().get(name).cloned()
    }

    /// Returns the registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.validators.read().keys().cloned().collect()
    }

    /// Returns the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.read().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.validators.read().is_empty()
    }

    /// Validates a document against a named compiled validator.
    ///
    /// This is the main entry point when using the registry: the schema was
    /// compiled at registration time, so each call here is a pure read.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the name doesn't exist.
    /// Validation findings themselves are never an `Err` — they come back
    /// inside the [`ValidationResult`].
    pub fn validate(&self, name: &str, document: &Value) -> Result<ValidationResult, RegistryError> {
        let compiled = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;

        Ok(validator::validate(document, &compiled))
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ValidatorRegistry {
    fn clone(&self) -> Self {
        Self {
            validators: Arc::clone(&self.validators),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema with a name that already exists.
    #[error("validator '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a name that doesn't exist.
    #[error("validator '{0}' not found")]
    SchemaNotFound(String),

    /// The schema tree failed to compile during registration.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
