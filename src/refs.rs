//! Type-reference integrity checking.
//!
//! A document may express a node's `type` indirectly, as an object carrying a
//! `$ref` pointer instead of a direct type name:
//!
//! ```yaml
//! item:
//!   type:
//!     $ref: '#/components/types/Foo'
//! ```
//!
//! This module scans a document for every such occurrence and verifies that
//! each reference into the reserved type-definitions sub-tree resolves to a
//! definition that actually exists in the same document. References outside
//! the reserved prefix belong to other mechanisms and are not this pass's
//! concern.

use serde_json::{json, Value};

use crate::error::{SourcePass, ValidationError};
use crate::pointer::JsonPointer;

/// Pointer prefix reserved for the document's reusable type definitions.
pub const TYPE_DEFINITIONS_PREFIX: &str = "#/components/types/";

/// A discovered indirect type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    /// Pointer to the `type` member holding the reference.
    pub pointer: JsonPointer,
    /// The raw `$ref` string value.
    pub target: String,
}

/// Collects every `type` member whose value is an object carrying a
/// string-valued `$ref` key.
///
/// Traversal is depth-first pre-order, visiting object members in
/// declaration order and array elements by index, so repeated runs over the
/// same document yield the references in the same order.
pub fn collect_type_refs(document: &Value) -> Vec<TypeRef> {
    let mut refs = Vec::new();
    walk(document, &JsonPointer::root(), &mut refs);
    refs
}

fn walk(value: &Value, pointer: &JsonPointer, refs: &mut Vec<TypeRef>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "type" {
                    if let Some(target) = child.get("$ref").and_then(Value::as_str) {
                        refs.push(TypeRef {
                            pointer: pointer.push_key("type"),
                            target: target.to_string(),
                        });
                    }
                }
                walk(child, &pointer.push_key(key), refs);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, &pointer.push_index(index), refs);
            }
        }
        _ => {}
    }
}

/// Whether a resolved target counts as a defined type.
///
/// Missing targets never reach here; of the present ones, `null`, `false`,
/// `0`, and the empty string are treated as undefined, while containers count
/// as defined even when empty.
fn is_defined(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Runs the reference-integrity pass over a document.
///
/// Returns one error per unresolved reference, in traversal order. The pass
/// never fails: a document with no indirect type references produces an
/// empty list.
///
/// # Example
///
/// ```rust
/// use crosscheck::check_type_references;
/// use serde_json::json;
///
/// let document = json!({
///     "components": {"types": {"Foo": {"kind": "record"}}},
///     "item": {"type": {"$ref": "#/components/types/Foo"}},
///     "other": {"type": {"$ref": "#/components/types/Bar"}}
/// });
///
/// let errors = check_type_references(&document);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].pointer.to_string(), "/other/type");
/// ```
pub fn check_type_references(document: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for type_ref in collect_type_refs(document) {
        // References outside the reserved sub-tree are out of scope here.
        if !type_ref.target.starts_with(TYPE_DEFINITIONS_PREFIX) {
            continue;
        }

        let defined = match JsonPointer::parse(&type_ref.target) {
            Ok(target) => target.resolve(document).map_or(false, is_defined),
            Err(_) => false,
        };

        if !defined {
            errors.push(
                ValidationError::new(
                    type_ref.pointer,
                    SourcePass::ReferenceIntegrity,
                    "must be reference to defined type",
                )
                .with_details(json!({"reference": type_ref.target})),
            );
        }
    }

    errors
}
