//! # Crosscheck
//!
//! A document validation library that runs two passes over every document and
//! accumulates ALL errors from both, providing comprehensive feedback rather
//! than short-circuiting on the first failure.
//!
//! ## Overview
//!
//! Validation is a pipeline of two passes:
//!
//! 1. **Structural**: the document is checked against a compiled schema
//!    (JSON Schema Draft 2020-12 by default), reporting every constraint
//!    violation.
//! 2. **Reference integrity**: the document is scanned for `type` members
//!    expressed indirectly as `{"$ref": "#/components/types/..."}` pointers,
//!    and every reference must resolve to a type definition that exists in
//!    the same document.
//!
//! Both passes always run; their findings merge into a single
//! [`ValidationResult`]. Findings are reported, never raised — only an
//! invalid schema ([`SchemaError`]) or unparseable input ([`InputError`]) is
//! a failure of the operation itself.
//!
//! ## Core Types
//!
//! - [`JsonPointer`]: RFC 6901 pointers into nested structures (e.g., `/items/0/type`)
//! - [`CompiledSchema`]: a reusable validator compiled once from a schema tree
//! - [`ValidationError`]: a single finding with pointer, pass, message, and details
//! - [`ValidationResult`]: the merged `{valid, errors}` outcome of one call
//! - [`ValidatorRegistry`]: compile-once, validate-many storage for named schemas
//!
//! ## Example
//!
//! ```rust
//! use crosscheck::{compile, validate};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {"name": {"type": "string"}}
//! });
//! let compiled = compile(&schema).unwrap();
//!
//! // A document whose type reference resolves is valid
//! let document = json!({
//!     "name": "order",
//!     "components": {"types": {"Foo": {"kind": "record"}}},
//!     "item": {"type": {"$ref": "#/components/types/Foo"}}
//! });
//! assert!(validate(&document, &compiled).valid());
//!
//! // A dangling reference is reported, not raised
//! let document = json!({
//!     "item": {"type": {"$ref": "#/components/types/Bar"}}
//! });
//! let result = validate(&document, &compiled);
//! assert!(!result.valid());
//! assert_eq!(result.errors()[0].message, "must be reference to defined type");
//! ```

pub mod compiler;
pub mod engine;
pub mod error;
pub mod input;
pub mod pointer;
pub mod refs;
pub mod registry;
pub mod result;
pub mod validator;

pub use compiler::{compile, CompiledSchema, SchemaError};
pub use engine::{JsonSchemaEngine, StructuralEngine, StructuralViolation};
pub use error::{SourcePass, ValidationError, ValidationErrors};
pub use input::{load_tree, parse_document, read_all, FileSystem, Format, InputError, StdFs};
pub use pointer::{JsonPointer, PointerSegment};
pub use refs::{check_type_references, collect_type_refs, TypeRef, TYPE_DEFINITIONS_PREFIX};
pub use registry::{RegistryError, ValidatorRegistry};
pub use result::ValidationResult;
pub use validator::{validate, validate_all};
