//! Input collaborators: reading raw text and parsing it into document trees.
//!
//! The validation core never parses text itself; schemas and documents arrive
//! as already-parsed trees. These helpers cover the boundary: reading an
//! entire input stream (typically standard input), parsing JSON or YAML text
//! into a [`serde_json::Value`], and loading files by extension through a
//! [`FileSystem`] abstraction so the loading path stays testable without
//! touching a real disk.
//!
//! Failures here are fatal [`InputError`]s — a document that cannot be turned
//! into a tree is an invalid input, not a validation finding.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Abstraction for filesystem reads.
///
/// This trait enables testing with mock filesystems and supports different
/// storage backends.
pub trait FileSystem: Send + Sync {
    /// The error type for filesystem operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the contents of a file as a string.
    fn read_file(&self, path: &Path) -> Result<String, Self::Error>;
}

/// The standard-library filesystem.
pub struct StdFs;

impl FileSystem for StdFs {
    type Error = std::io::Error;

    fn read_file(&self, path: &Path) -> Result<String, Self::Error> {
        std::fs::read_to_string(path)
    }
}

/// Errors raised when input cannot be turned into a document tree.
///
/// These are fatal: the caller receives a failed operation, distinct from the
/// report-only structural and reference-integrity findings.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error reading a file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, Box<dyn std::error::Error + Send + Sync>),

    /// IO error reading a stream
    #[error("failed to read input stream: {0}")]
    Stream(#[from] std::io::Error),

    /// JSON parsing error
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The parsed YAML has no JSON-tree equivalent
    #[error("document is not representable as a JSON tree: {0}")]
    Conversion(String),

    /// The file extension maps to no known format
    #[error("cannot infer document format from path: {0}")]
    UnknownFormat(PathBuf),
}

/// Source text format for documents and schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON text
    Json,
    /// YAML text
    Yaml,
}

impl Format {
    /// Infers the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Reads an entire stream to a string.
///
/// This is the standard-input collaborator: callers hand the core a fully
/// buffered string, never a partially consumed stream. Interrupted reads are
/// retried by the underlying implementation.
pub fn read_all(reader: impl Read) -> Result<String, InputError> {
    Ok(std::io::read_to_string(reader)?)
}

/// Parses source text into a document tree.
///
/// YAML input is converted to the JSON data model; YAML constructs with no
/// JSON equivalent (non-scalar mapping keys) are fatal.
///
/// # Example
///
/// ```rust
/// use crosscheck::{parse_document, Format};
///
/// let document = parse_document("item:\n  type:\n    $ref: '#/components/types/Foo'\n", Format::Yaml).unwrap();
/// assert_eq!(document["item"]["type"]["$ref"], "#/components/types/Foo");
/// ```
pub fn parse_document(text: &str, format: Format) -> Result<Value, InputError> {
    match format {
        Format::Json => Ok(serde_json::from_str(text)?),
        Format::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
            yaml_to_json(&yaml)
        }
    }
}

/// Converts a `serde_yaml::Value` into a `serde_json::Value`.
///
/// YAML has a richer type system than JSON (tags, non-string keys); documents
/// under validation use only the JSON-compatible subset. Scalar mapping keys
/// are stringified the way JSON expects; anything else cannot be addressed by
/// a pointer and is rejected.
pub fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, InputError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| InputError::Conversion(format!("cannot represent float {f}")))
            } else {
                Err(InputError::Conversion(format!("unsupported number: {n:?}")))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, InputError> = seq.iter().map(yaml_to_json).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (key, value) in map {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(InputError::Conversion(format!(
                            "unsupported mapping key: {other:?}"
                        )))
                    }
                };
                json_map.insert(key, yaml_to_json(value)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => {
            // tags carry no structure the validator can address
            yaml_to_json(&tagged.value)
        }
    }
}

/// Loads and parses a document or schema file, inferring the format from the
/// file extension.
///
/// # Errors
///
/// Returns `InputError::UnknownFormat` for unrecognized extensions,
/// `InputError::Io` when the read fails, and the usual parse errors for
/// malformed content.
pub fn load_tree<F: FileSystem>(path: &Path, fs: &F) -> Result<Value, InputError> {
    let format =
        Format::from_path(path).ok_or_else(|| InputError::UnknownFormat(path.to_path_buf()))?;
    let text = fs
        .read_file(path)
        .map_err(|e| InputError::Io(path.to_path_buf(), Box::new(e)))?;
    parse_document(&text, format)
}
