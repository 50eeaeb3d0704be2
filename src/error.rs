//! Error types for pattern parsing and element rendering.

use crate::skeleton::DateField;
use thiserror::Error;

/// Errors that can occur when parsing a locale date pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("empty date pattern")]
    EmptyPattern,

    #[error("unterminated quoted literal at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("date pattern '{pattern}' has no {field} field")]
    MissingField { pattern: String, field: DateField },

    #[error("date pattern '{pattern}' has more than one {field} field")]
    DuplicateField { pattern: String, field: DateField },
}

/// Errors that can occur when rendering a date select element.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("expected a {expected} element, found {found}")]
    InvalidElementType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("element has no assigned name")]
    MissingName,

    #[error(transparent)]
    Pattern(#[from] PatternError),
}
