//! String template schemas: declared fields bound to one pattern.
//!
//! A [`TemplateSchema`] is validated once, at definition time: the declared
//! field set must equal the pattern's placeholder set, reserved names are
//! rejected, and no usable schema exists if any check fails. Instances are
//! then built through two explicit entry points - [`from_string`] parses
//! external text, [`from_fields`] adopts known values - and both land in
//! the same constructed state: a [`TemplateRecord`] whose canonical string
//! is always recomputed from its fields.
//!
//! [`from_string`]: TemplateSchema::from_string
//! [`from_fields`]: TemplateSchema::from_fields

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, TemplateError};
use crate::pattern::TemplatePattern;

/// Field names the schema machinery keeps for itself.
pub const RESERVED_FIELDS: [&str; 2] = ["string", "template"];

/// A declared set of field names bound to a compiled pattern.
///
/// # Example
///
/// ```
/// use readout_template::TemplateSchema;
///
/// let schema = TemplateSchema::define(
///     ["year", "month", "day"],
///     "{year}/{month}/{day}",
/// ).unwrap();
///
/// let record = schema.from_string("2020/01/15").unwrap();
/// assert_eq!(record.get("year"), Some("2020"));
/// assert_eq!(record.string(), "2020/01/15");
///
/// let same = schema
///     .from_fields([("year", "2020"), ("month", "01"), ("day", "15")])
///     .unwrap();
/// assert_eq!(same.string(), "2020/01/15");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateSchema {
    fields: Vec<String>,
    pattern: TemplatePattern,
}

impl TemplateSchema {
    /// Defines a schema, running every consistency check once.
    ///
    /// # Errors
    ///
    /// - any pattern compilation error;
    /// - [`TemplateError::ReservedField`] for `string` or `template`;
    /// - [`TemplateError::DuplicateField`] for a repeated declaration;
    /// - [`TemplateError::FieldMismatch`] when the declared field set and
    ///   the placeholder set differ.
    ///
    /// On failure no schema exists; the checks never rerun per instance.
    pub fn define<I, S>(fields: I, pattern: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

        for name in &fields {
            if RESERVED_FIELDS.contains(&name.as_str()) {
                return Err(TemplateError::ReservedField { name: name.clone() });
            }
        }
        for (i, name) in fields.iter().enumerate() {
            if fields[..i].contains(name) {
                return Err(TemplateError::DuplicateField { name: name.clone() });
            }
        }

        let pattern = TemplatePattern::compile(pattern)?;

        let missing: Vec<String> = pattern
            .placeholders()
            .iter()
            .filter(|p| !fields.contains(p))
            .cloned()
            .collect();
        let unexpected: Vec<String> = fields
            .iter()
            .filter(|f| !pattern.placeholders().contains(f))
            .cloned()
            .collect();
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(TemplateError::FieldMismatch {
                missing,
                unexpected,
            });
        }

        Ok(Self { fields, pattern })
    }

    /// Declared field names, in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &TemplatePattern {
        &self.pattern
    }

    /// Parses external text into a record.
    ///
    /// The record's canonical string is recomputed from the parsed fields,
    /// not copied from the input.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Mismatch`] for non-conforming text.
    pub fn from_string(&self, text: &str) -> Result<TemplateRecord> {
        let values = self.pattern.parse(text)?;
        let string = self.pattern.render(&values)?;
        Ok(TemplateRecord { values, string })
    }

    /// Builds a record from field values.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::UnknownField`] for a name not in the schema;
    /// - [`TemplateError::MissingField`] when a declared field has no
    ///   value.
    pub fn from_fields<I, K, V>(&self, pairs: I) -> Result<TemplateRecord>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            if !self.fields.contains(&name) {
                return Err(TemplateError::UnknownField { name });
            }
            values.insert(name, value.into());
        }
        for name in &self.fields {
            if !values.contains_key(name) {
                return Err(TemplateError::MissingField { name: name.clone() });
            }
        }

        let string = self.pattern.render(&values)?;
        Ok(TemplateRecord { values, string })
    }
}

/// An immutable field-to-value mapping with its canonical rendering.
///
/// `string()` is derived from the fields through the schema's pattern at
/// construction; it is never supplied independently and cannot diverge
/// from the field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    values: BTreeMap<String, String>,
    string: String,
}

impl TemplateRecord {
    /// Looks up one field value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    /// All field values, keyed by name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// The canonical rendering of the fields through the pattern.
    pub fn string(&self) -> &str {
        &self.string
    }
}

impl fmt::Display for TemplateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_schema() -> TemplateSchema {
        TemplateSchema::define(["year", "month", "day"], "{year}/{month}/{day}").unwrap()
    }

    // =========================================================================
    // Definition-time validation
    // =========================================================================

    #[test]
    fn test_define_accepts_matching_sets() {
        let schema = date_schema();
        assert_eq!(schema.fields(), ["year", "month", "day"]);
        assert_eq!(schema.pattern().as_str(), "{year}/{month}/{day}");
    }

    #[test]
    fn test_define_order_is_irrelevant_to_the_check() {
        // The comparison is on sets; declaration order need not follow the
        // pattern.
        assert!(TemplateSchema::define(["day", "year", "month"], "{year}/{month}/{day}").is_ok());
    }

    #[test]
    fn test_missing_declared_field_fails_at_definition() {
        let err = TemplateSchema::define(["year", "month"], "{year}/{month}/{day}").unwrap_err();
        match err {
            TemplateError::FieldMismatch { missing, unexpected } => {
                assert_eq!(missing, ["day"]);
                assert!(unexpected.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_undeclared_placeholder_fails_at_definition() {
        let err =
            TemplateSchema::define(["year", "month", "day", "hour"], "{year}/{month}/{day}")
                .unwrap_err();
        match err {
            TemplateError::FieldMismatch { missing, unexpected } => {
                assert!(missing.is_empty());
                assert_eq!(unexpected, ["hour"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reserved_fields_rejected() {
        for reserved in RESERVED_FIELDS {
            let err = TemplateSchema::define([reserved], &format!("{{{reserved}}}")).unwrap_err();
            assert!(matches!(err, TemplateError::ReservedField { .. }));
        }
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = TemplateSchema::define(["a", "a"], "{a}").unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateField { .. }));
    }

    #[test]
    fn test_bad_pattern_fails_at_definition() {
        let err = TemplateSchema::define(["a", "b"], "{a}{b}").unwrap_err();
        assert!(matches!(err, TemplateError::AdjacentPlaceholders { .. }));
    }

    // =========================================================================
    // Construction from a string
    // =========================================================================

    #[test]
    fn test_from_string() {
        let record = date_schema().from_string("2020/01/15").unwrap();
        assert_eq!(record.get("year"), Some("2020"));
        assert_eq!(record.get("month"), Some("01"));
        assert_eq!(record.get("day"), Some("15"));
        assert_eq!(record.string(), "2020/01/15");
    }

    #[test]
    fn test_from_string_mismatch() {
        let err = date_schema().from_string("2020-01-15").unwrap_err();
        assert!(matches!(err, TemplateError::Mismatch { .. }));
    }

    #[test]
    fn test_from_string_recomputes_canonical_string() {
        // With an unambiguous pattern the re-render equals the input.
        let record = date_schema().from_string("2020/01/15").unwrap();
        assert_eq!(record.string(), "2020/01/15");
        assert_eq!(record.to_string(), "2020/01/15");
    }

    // =========================================================================
    // Construction from fields
    // =========================================================================

    #[test]
    fn test_from_fields() {
        let record = date_schema()
            .from_fields([("year", "2020"), ("month", "01"), ("day", "15")])
            .unwrap();
        assert_eq!(record.string(), "2020/01/15");
    }

    #[test]
    fn test_from_fields_missing() {
        let err = date_schema()
            .from_fields([("year", "2020"), ("month", "01")])
            .unwrap_err();
        match err {
            TemplateError::MissingField { name } => assert_eq!(name, "day"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_fields_unknown() {
        let err = date_schema()
            .from_fields([("year", "2020"), ("week", "03")])
            .unwrap_err();
        match err {
            TemplateError::UnknownField { name } => assert_eq!(name, "week"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // =========================================================================
    // Round trip
    // =========================================================================

    #[test]
    fn test_round_trip_both_directions() {
        let schema = date_schema();

        let from_fields = schema
            .from_fields([("year", "2020"), ("month", "01"), ("day", "15")])
            .unwrap();
        assert_eq!(from_fields.string(), "2020/01/15");

        let from_string = schema.from_string("2020/01/15").unwrap();
        assert_eq!(from_string, from_fields);
        assert_eq!(from_string.get("month"), Some("01"));
    }

    #[test]
    fn test_records_compare_by_content() {
        let schema = TemplateSchema::define(["env", "region"], "{env}.{region}").unwrap();
        let a = schema.from_string("prod.us-east-1").unwrap();
        let b = schema
            .from_fields([("env", "prod"), ("region", "us-east-1")])
            .unwrap();
        assert_eq!(a, b);
    }
}
