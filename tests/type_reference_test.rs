//! Integration tests for the type-reference integrity pass.

use crosscheck::{compile, validate, CompiledSchema, SourcePass};
use serde_json::json;

/// A permissive schema so only the reference pass produces findings.
fn open_schema() -> CompiledSchema {
    compile(&json!({"type": "object"})).unwrap()
}

#[test]
fn test_no_type_refs_means_valid() {
    let document = json!({"name": "plain", "nested": {"type": "string"}});
    let result = validate(&document, &open_schema());
    assert!(result.valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_resolved_reference_is_valid() {
    let document = json!({
        "components": {"types": {"Foo": {"kind": "record"}}},
        "item": {"type": {"$ref": "#/components/types/Foo"}}
    });
    assert!(validate(&document, &open_schema()).valid());
}

#[test]
fn test_dangling_reference_reported_once() {
    let document = json!({
        "item": {"type": {"$ref": "#/components/types/Bar"}}
    });
    let result = validate(&document, &open_schema());

    assert!(!result.valid());
    assert_eq!(result.errors().len(), 1);

    let error = &result.errors()[0];
    assert_eq!(error.pass, SourcePass::ReferenceIntegrity);
    assert_eq!(error.pointer.to_string(), "/item/type");
    assert_eq!(error.message, "must be reference to defined type");
    assert_eq!(
        error.details.as_ref().unwrap()["reference"],
        "#/components/types/Bar"
    );
}

#[test]
fn test_empty_object_definition_counts_as_defined() {
    // a present-but-empty definition resolves
    let document = json!({
        "components": {"types": {"Foo": {}}},
        "item": {"type": {"$ref": "#/components/types/Foo"}}
    });
    assert!(validate(&document, &open_schema()).valid());
}

#[test]
fn test_null_definition_counts_as_undefined() {
    let document = json!({
        "components": {"types": {"Foo": null}},
        "item": {"type": {"$ref": "#/components/types/Foo"}}
    });
    let result = validate(&document, &open_schema());
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn test_foreign_prefix_is_out_of_scope() {
    let document = json!({
        "item": {"type": {"$ref": "#/other/Foo"}}
    });
    assert!(validate(&document, &open_schema()).valid());
}

#[test]
fn test_direct_type_names_are_not_references() {
    let document = json!({
        "item": {"type": "#/components/types/Foo"}
    });
    assert!(validate(&document, &open_schema()).valid());
}

#[test]
fn test_multiple_dangling_references_all_reported() {
    let document = json!({
        "a": {"type": {"$ref": "#/components/types/A"}},
        "b": {"type": {"$ref": "#/components/types/B"}}
    });
    let result = validate(&document, &open_schema());
    assert_eq!(result.errors().len(), 2);
}

#[test]
fn test_references_inside_arrays_are_found() {
    let document = json!({
        "components": {"types": {"Known": {"kind": "record"}}},
        "items": [
            {"type": {"$ref": "#/components/types/Known"}},
            {"type": {"$ref": "#/components/types/Unknown"}}
        ]
    });
    let result = validate(&document, &open_schema());

    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].pointer.to_string(), "/items/1/type");
}

#[test]
fn test_errors_appear_in_document_order() {
    let document = json!({
        "zeta": {"type": {"$ref": "#/components/types/Z"}},
        "alpha": {"type": {"$ref": "#/components/types/A"}},
        "middle": {"nested": {"type": {"$ref": "#/components/types/M"}}}
    });
    let result = validate(&document, &open_schema());

    let pointers: Vec<_> = result
        .errors()
        .iter()
        .map(|e| e.pointer.to_string())
        .collect();
    assert_eq!(
        pointers,
        vec!["/zeta/type", "/alpha/type", "/middle/nested/type"]
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let schema = open_schema();
    let document = json!({
        "b": {"type": {"$ref": "#/components/types/B"}},
        "a": {"type": {"$ref": "#/components/types/A"}}
    });

    let first = validate(&document, &schema);
    let second = validate(&document, &schema);

    assert_eq!(first, second);

    let render = |result: &crosscheck::ValidationResult| {
        result
            .errors()
            .iter()
            .map(|e| e.to_json().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(render(&first), render(&second));
}

#[test]
fn test_structural_and_reference_errors_merge_in_pass_order() {
    let compiled = compile(&json!({
        "type": "object",
        "properties": {"name": {"type": "string"}},
        "required": ["name"]
    }))
    .unwrap();

    let document = json!({
        "item": {"type": {"$ref": "#/components/types/Missing"}},
        "name": 42
    });
    let result = validate(&document, &compiled);

    assert_eq!(result.errors().len(), 2);
    assert_eq!(result.errors()[0].pass, SourcePass::Structural);
    assert_eq!(result.errors()[1].pass, SourcePass::ReferenceIntegrity);
}
