//! JSON Pointer representation for locating values in nested structures.
//!
//! This module provides [`JsonPointer`] and [`PointerSegment`] types for
//! building, parsing, and resolving RFC 6901 pointers against JSON-like trees.

use std::fmt::{self, Display};

use serde_json::Value;

/// A segment of a JSON Pointer.
///
/// Pointers are built from segments that represent either object key access
/// or array indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointerSegment {
    /// An object key access (e.g., `components`, `$ref`)
    Key(String),
    /// An array index access (e.g., `0`, `42`)
    Index(usize),
}

impl PointerSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PointerSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PointerSegment::Index(idx)
    }
}

/// Errors that can occur when parsing pointer text.
#[derive(Debug, thiserror::Error)]
pub enum PointerParseError {
    /// The text is neither empty nor rooted with a `/`.
    #[error("pointer must be empty or start with '/': '{0}'")]
    NotRooted(String),
}

/// A pointer to a value in a nested JSON-like structure.
///
/// `JsonPointer` represents locations like `/components/types/Foo` and
/// provides methods for building pointers incrementally, parsing them from
/// RFC 6901 text (with or without a leading `#` fragment marker), and
/// resolving them against a [`serde_json::Value`].
///
/// # Example
///
/// ```rust
/// use crosscheck::JsonPointer;
///
/// let pointer = JsonPointer::root()
///     .push_key("items")
///     .push_index(0)
///     .push_key("type");
///
/// assert_eq!(pointer.to_string(), "/items/0/type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPointer {
    segments: Vec<PointerSegment>,
}

impl JsonPointer {
    /// Creates an empty pointer representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses RFC 6901 pointer text, accepting an optional leading `#`.
    ///
    /// The empty string (or `#` alone) is the root pointer. `~1` and `~0`
    /// escapes decode to `/` and `~` respectively.
    ///
    /// # Errors
    ///
    /// Returns `PointerParseError::NotRooted` if the text is non-empty and
    /// does not start with `/`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crosscheck::JsonPointer;
    ///
    /// let pointer = JsonPointer::parse("#/components/types/Foo").unwrap();
    /// assert_eq!(pointer.len(), 3);
    /// assert_eq!(pointer.to_string(), "/components/types/Foo");
    /// ```
    pub fn parse(text: &str) -> Result<Self, PointerParseError> {
        let text = text.strip_prefix('#').unwrap_or(text);
        if text.is_empty() {
            return Ok(Self::root());
        }
        let Some(rest) = text.strip_prefix('/') else {
            return Err(PointerParseError::NotRooted(text.to_string()));
        };
        let segments = rest
            .split('/')
            .map(|token| PointerSegment::Key(unescape(token)))
            .collect();
        Ok(Self { segments })
    }

    /// Creates a pointer from a single key segment.
    pub fn from_key(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PointerSegment::Key(name.into())],
        }
    }

    /// Returns a new pointer with a key segment appended.
    ///
    /// This method does not modify the original pointer; it returns a new one.
    pub fn push_key(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PointerSegment::Key(name.into()));
        Self { segments }
    }

    /// Returns a new pointer with an index segment appended.
    ///
    /// This method does not modify the original pointer; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PointerSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root pointer (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this pointer.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this pointer has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the pointer segments.
    pub fn segments(&self) -> impl Iterator<Item = &PointerSegment> {
        self.segments.iter()
    }

    /// Returns the parent pointer (all segments except the last), or None if
    /// this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PointerSegment> {
        self.segments.last()
    }

    /// Resolves this pointer against a document, returning the addressed
    /// value if the full path exists.
    ///
    /// Key segments address object members directly; against an array they
    /// are reinterpreted as indices when they are valid RFC 6901 index
    /// tokens (digits only, no leading zeros). Anything else fails to
    /// resolve and yields `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crosscheck::JsonPointer;
    /// use serde_json::json;
    ///
    /// let document = json!({"components": {"types": {"Foo": {"kind": "record"}}}});
    /// let pointer = JsonPointer::parse("/components/types/Foo").unwrap();
    ///
    /// assert_eq!(pointer.resolve(&document), Some(&json!({"kind": "record"})));
    /// assert!(JsonPointer::parse("/components/types/Bar").unwrap().resolve(&document).is_none());
    /// ```
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        let mut current = document;
        for segment in &self.segments {
            current = match (segment, current) {
                (PointerSegment::Key(key), Value::Object(map)) => map.get(key)?,
                (PointerSegment::Key(key), Value::Array(items)) => {
                    items.get(parse_index(key)?)?
                }
                (PointerSegment::Index(idx), Value::Array(items)) => items.get(*idx)?,
                (PointerSegment::Index(idx), Value::Object(map)) => {
                    map.get(&idx.to_string())?
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

impl Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PointerSegment::Key(name) => write!(f, "/{}", escape(name))?,
                PointerSegment::Index(idx) => write!(f, "/{}", idx)?,
            }
        }
        Ok(())
    }
}

/// Decodes RFC 6901 token escapes. `~1` must be handled before `~0` so that
/// `~01` round-trips back to the literal `~1`.
fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Encodes a key as an RFC 6901 token. `~` must be handled before `/`.
fn escape(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// Parses an RFC 6901 array index token: digits only, no leading zeros.
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
