//! Error types for the formatting crate.

use thiserror::Error;

use crate::value::Scalar;

/// Definition-time configuration failures.
///
/// Raised while building a [`Formatters`](crate::Formatters) registry or
/// parsing a display pattern. No partially-valid object is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A rule name does not carry the reserved `_format` suffix.
    #[error("format rule name '{name}' must end in '_format'")]
    BadRuleName { name: String },

    /// The null fallback is configured through the builder, not as a rule.
    #[error("'{name}' is reserved; set the null fallback with null_format()")]
    ReservedRuleName { name: String },

    /// A display pattern string is malformed.
    #[error("invalid display pattern '{pattern}': {reason}")]
    BadPattern { pattern: String, reason: String },
}

/// Call-time formatting failures.
///
/// Null-like input is policy (short-circuit to the null fallback), never an
/// error; these cover genuinely unformattable calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value's type does not fit the rule, e.g. text into a numeric spec.
    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// No rule is registered under the given short name.
    #[error("unknown format rule '{name}'")]
    UnknownRule { name: String },
}

impl FormatError {
    /// Builds a `TypeMismatch` from the offending scalar.
    pub fn type_mismatch(expected: &'static str, got: &Scalar) -> Self {
        FormatError::TypeMismatch {
            expected,
            actual: got.type_name(),
        }
    }
}

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
