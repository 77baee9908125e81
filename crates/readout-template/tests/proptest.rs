//! Property-based tests for pattern round-trips using proptest.

use std::collections::BTreeMap;

use proptest::prelude::*;
use readout_template::{TemplateError, TemplatePattern, TemplateSchema};

// ============================================================================
// Test helpers
// ============================================================================

/// Field values that cannot collide with the separators used below.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,10}"
}

/// Literal separators, drawn to include pattern-special characters.
fn separator_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "/".to_string(),
        "-".to_string(),
        ".".to_string(),
        "(+)".to_string(),
        "[sep]".to_string(),
        " | ".to_string(),
    ])
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Render-then-parse over a fixed three-field pattern is identity.
    #[test]
    fn date_pattern_round_trips(
        year in value_strategy(),
        month in value_strategy(),
        day in value_strategy(),
    ) {
        let schema = TemplateSchema::define(
            ["year", "month", "day"],
            "{year}/{month}/{day}",
        ).unwrap();

        let record = schema
            .from_fields([
                ("year", year.clone()),
                ("month", month.clone()),
                ("day", day.clone()),
            ])
            .unwrap();

        let reparsed = schema.from_string(record.string()).unwrap();
        prop_assert_eq!(reparsed.get("year"), Some(year.as_str()));
        prop_assert_eq!(reparsed.get("month"), Some(month.as_str()));
        prop_assert_eq!(reparsed.get("day"), Some(day.as_str()));
        prop_assert_eq!(reparsed.string(), record.string());
    }

    /// Round trip holds with metacharacter-heavy literal separators: the
    /// literals match themselves, not as pattern syntax.
    #[test]
    fn metacharacter_separators_round_trip(
        a in value_strategy(),
        b in value_strategy(),
        sep in separator_strategy(),
    ) {
        let pattern = format!("{{a}}{}{{b}}", sep);
        let compiled = TemplatePattern::compile(&pattern).unwrap();

        let mut fields = BTreeMap::new();
        fields.insert("a".to_string(), a.clone());
        fields.insert("b".to_string(), b.clone());

        let rendered = compiled.render(&fields).unwrap();
        prop_assert_eq!(rendered.clone(), format!("{}{}{}", a, sep, b));

        let parsed = compiled.parse(&rendered).unwrap();
        prop_assert_eq!(parsed, fields);
    }

    /// Text missing the separator never parses, and the failure is the
    /// typed mismatch condition.
    #[test]
    fn nonconforming_text_is_typed_mismatch(value in "[a-z0-9]{1,20}") {
        let compiled = TemplatePattern::compile("{a}/{b}").unwrap();
        let err = compiled.parse(&value).unwrap_err();
        prop_assert!(matches!(err, TemplateError::Mismatch { .. }), "expected a Mismatch error");
    }

    /// Parse-then-render returns the exact input for conforming text.
    #[test]
    fn parse_then_render_is_identity(
        a in value_strategy(),
        b in value_strategy(),
    ) {
        let schema = TemplateSchema::define(["a", "b"], "{a}:{b}").unwrap();
        let text = format!("{}:{}", a, b);
        let record = schema.from_string(&text).unwrap();
        prop_assert_eq!(record.string(), text);
    }
}
