//! Display-pattern strings: one placeholder, optional literal text around it.
//!
//! A display pattern renders a single scalar inside fixed literal text, e.g.
//! `"${:,.0f}"` or `"{:.2%}"`. The placeholder carries an optional numeric
//! spec:
//!
//! - `{}` - plain display form of the value
//! - `{:spec}` - numeric spec: `[,] [.N] [f | %]`
//!
//! where `,` groups thousands, `.N` fixes the decimal places (0 when
//! omitted), `f` is fixed-point, and `%` multiplies by 100 and appends `%`.
//! `{{` and `}}` escape to literal braces.
//!
//! Patterns are parsed once at definition time; applying a parsed pattern
//! to a value cannot fail on anything except a type mismatch.

use crate::error::{ConfigError, FormatError};
use crate::value::Scalar;

/// Whether a numeric spec renders fixed-point or percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberKind {
    Fixed,
    Percent,
}

/// Parsed numeric spec from a `{:...}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberSpec {
    grouping: bool,
    precision: usize,
    kind: NumberKind,
}

/// What the single placeholder substitutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// `{}` - display form of any scalar.
    Display,
    /// `{:spec}` - formatted number.
    Number(NumberSpec),
}

/// A compiled display pattern: literal prefix, one slot, literal suffix.
///
/// # Example
///
/// ```
/// use readout_format::{DisplayPattern, Scalar};
///
/// let dollars = DisplayPattern::parse("${:,.0f}").unwrap();
/// assert_eq!(dollars.apply(&Scalar::Float(1234567.0)).unwrap(), "$1,234,567");
///
/// let percent = DisplayPattern::parse("{:.2%}").unwrap();
/// assert_eq!(percent.apply(&Scalar::Float(0.1234)).unwrap(), "12.34%");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPattern {
    raw: String,
    prefix: String,
    slot: Slot,
    suffix: String,
}

impl DisplayPattern {
    /// Parses a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BadPattern`] if the pattern has no
    /// placeholder, more than one, an unclosed placeholder, or a malformed
    /// numeric spec.
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        let bad = |reason: &str| ConfigError::BadPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut slot: Option<Slot> = None;
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            let literal = if slot.is_none() {
                &mut prefix
            } else {
                &mut suffix
            };
            match ch {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut spec = String::new();
                    let mut closed = false;
                    for inner in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        spec.push(inner);
                    }
                    if !closed {
                        return Err(bad("unclosed placeholder"));
                    }
                    if slot.is_some() {
                        return Err(bad("more than one placeholder"));
                    }
                    slot = Some(parse_slot(&spec).map_err(|reason| bad(&reason))?);
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(bad("stray '}' outside a placeholder")),
                other => literal.push(other),
            }
        }

        let slot = slot.ok_or_else(|| bad("no placeholder"))?;
        Ok(Self {
            raw: pattern.to_string(),
            prefix,
            slot,
            suffix,
        })
    }

    /// Returns the raw pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Renders a value through the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TypeMismatch`] when a numeric spec receives a
    /// non-numeric scalar. The `{}` slot accepts any scalar.
    pub fn apply(&self, value: &Scalar) -> Result<String, FormatError> {
        let rendered = match self.slot {
            Slot::Display => value.to_string(),
            Slot::Number(spec) => {
                let num = value
                    .as_f64()
                    .ok_or_else(|| FormatError::type_mismatch("number", value))?;
                format_number(num, spec)
            }
        };
        Ok(format!("{}{}{}", self.prefix, rendered, self.suffix))
    }
}

/// Parses the text between `{` and `}` into a slot.
fn parse_slot(spec: &str) -> Result<Slot, String> {
    if spec.is_empty() {
        return Ok(Slot::Display);
    }
    let body = spec
        .strip_prefix(':')
        .ok_or_else(|| format!("unsupported placeholder '{{{}}}'", spec))?;

    let mut rest = body;
    let grouping = if let Some(r) = rest.strip_prefix(',') {
        rest = r;
        true
    } else {
        false
    };

    let mut precision = 0;
    if let Some(r) = rest.strip_prefix('.') {
        let digits: String = r.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err("precision '.' must be followed by digits".to_string());
        }
        precision = digits
            .parse()
            .map_err(|_| format!("precision '{}' out of range", digits))?;
        rest = &r[digits.len()..];
    }

    let kind = match rest {
        "" | "f" => NumberKind::Fixed,
        "%" => NumberKind::Percent,
        other => return Err(format!("unknown format type '{}'", other)),
    };

    Ok(Slot::Number(NumberSpec {
        grouping,
        precision,
        kind,
    }))
}

/// Formats a number per a parsed spec.
fn format_number(value: f64, spec: NumberSpec) -> String {
    let scaled = match spec.kind {
        NumberKind::Fixed => value,
        NumberKind::Percent => value * 100.0,
    };
    let mut body = format!("{:.*}", spec.precision, scaled);
    if spec.grouping {
        body = group_thousands(&body);
    }
    if spec.kind == NumberKind::Percent {
        body.push('%');
    }
    body
}

/// Inserts `,` separators into the integer part of an already-formatted
/// number.
fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(pattern: &str, value: impl Into<Scalar>) -> String {
        DisplayPattern::parse(pattern)
            .unwrap()
            .apply(&value.into())
            .unwrap()
    }

    #[test]
    fn test_plain_display_slot() {
        assert_eq!(apply("{}", "abc"), "abc");
        assert_eq!(apply("<{}>", 42i64), "<42>");
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(apply("{:.2f}", 2.5), "2.50");
        assert_eq!(apply("{:.0f}", 2.5), "2");
        assert_eq!(apply("{:.0f}", 3.5), "4");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(apply("{:,.0f}", 1234567.0), "1,234,567");
        assert_eq!(apply("{:,.2f}", 1234.5), "1,234.50");
        assert_eq!(apply("{:,.0f}", -1234567.0), "-1,234,567");
        assert_eq!(apply("{:,.0f}", 999.0), "999");
    }

    #[test]
    fn test_percent() {
        assert_eq!(apply("{:.0%}", 0.25), "25%");
        assert_eq!(apply("{:.2%}", 0.1234), "12.34%");
        assert_eq!(apply("{:.2%}", -0.5), "-50.00%");
    }

    #[test]
    fn test_dollar_prefix() {
        assert_eq!(apply("${:,.0f}", 1234567.0), "$1,234,567");
    }

    #[test]
    fn test_literal_suffix() {
        assert_eq!(apply("{:.1f} units", 3.25), "3.2 units");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(apply("{{{}}}", "x"), "{x}");
    }

    #[test]
    fn test_int_through_numeric_spec() {
        assert_eq!(apply("{:,.0f}", 1_000_000i64), "1,000,000");
    }

    #[test]
    fn test_type_mismatch() {
        let p = DisplayPattern::parse("{:.2f}").unwrap();
        let err = p.apply(&Scalar::Str("abc".into())).unwrap_err();
        assert!(matches!(err, FormatError::TypeMismatch { .. }));
    }

    #[test]
    fn test_no_placeholder_rejected() {
        let err = DisplayPattern::parse("plain text").unwrap_err();
        assert!(matches!(err, ConfigError::BadPattern { .. }));
        assert!(err.to_string().contains("no placeholder"));
    }

    #[test]
    fn test_multiple_placeholders_rejected() {
        let err = DisplayPattern::parse("{} and {}").unwrap_err();
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn test_unclosed_placeholder_rejected() {
        let err = DisplayPattern::parse("${:,.0f").unwrap_err();
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_bad_spec_rejected() {
        assert!(DisplayPattern::parse("{:.f}").is_err());
        assert!(DisplayPattern::parse("{:q}").is_err());
        assert!(DisplayPattern::parse("{name}").is_err());
    }

    #[test]
    fn test_group_thousands_edges() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("-1000.25"), "-1,000.25");
    }
}
