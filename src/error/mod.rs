//! Error types for validation findings.
//!
//! This module provides types for representing report-only validation errors
//! with rich context: location pointer, producing pass, message, and details.

mod validation_error;

pub use validation_error::{SourcePass, ValidationError, ValidationErrors};
