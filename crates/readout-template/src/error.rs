//! Error types for the template crate.

use thiserror::Error;

/// Errors from compiling patterns, defining schemas, and converting
/// records.
///
/// Compile- and definition-time variants are fatal: no usable pattern or
/// schema is produced. Run-time variants ([`Mismatch`], [`MissingField`],
/// [`UnknownField`]) report one conversion attempt and leave the schema
/// intact.
///
/// [`Mismatch`]: TemplateError::Mismatch
/// [`MissingField`]: TemplateError::MissingField
/// [`UnknownField`]: TemplateError::UnknownField
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A `{` was never closed.
    #[error("unclosed placeholder in pattern '{pattern}'")]
    UnclosedPlaceholder { pattern: String },

    /// A `{}` token with no name inside.
    #[error("empty placeholder name in pattern '{pattern}'")]
    EmptyPlaceholder { pattern: String },

    /// Two placeholders with no literal text between them; captures would
    /// be ambiguous.
    #[error("placeholders '{{{first}}}' and '{{{second}}}' are adjacent; \
             insert literal text between them")]
    AdjacentPlaceholders { first: String, second: String },

    /// The synthesized matcher failed to compile.
    #[error("could not compile pattern '{pattern}'")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A declared field uses a reserved name.
    #[error("field name '{name}' is reserved")]
    ReservedField { name: String },

    /// A field is declared more than once.
    #[error("field '{name}' is declared more than once")]
    DuplicateField { name: String },

    /// Declared fields and pattern placeholders are not the same set.
    #[error("declared fields do not match pattern placeholders \
             (missing from declaration: {missing:?}, not in pattern: {unexpected:?})")]
    FieldMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// The text does not conform to the pattern.
    #[error("'{text}' does not match pattern '{pattern}'")]
    Mismatch { pattern: String, text: String },

    /// A declared field has no value.
    #[error("no value for field '{name}'")]
    MissingField { name: String },

    /// A value was supplied for an undeclared field.
    #[error("unknown field '{name}'")]
    UnknownField { name: String },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
