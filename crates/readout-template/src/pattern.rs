//! Template pattern compiler: `{name}` patterns as renderer and parser.
//!
//! A pattern like `"{year}/{month}/{day}"` is compiled once into an ordered
//! list of literal and placeholder segments plus an anchored matcher.
//! Literal text is escaped before the matcher is built, so pattern-special
//! characters (`.`, `(`, `+`, ...) match only themselves. Adjacent
//! placeholders with no literal separator are rejected at compile time -
//! their captures would be ambiguous.
//!
//! `{{` and `}}` escape to literal braces.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{Result, TemplateError};

/// One piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text matched (and rendered) verbatim.
    Literal(String),
    /// A named `{name}` slot capturing one-or-more characters.
    Placeholder(String),
}

/// A compiled template pattern.
///
/// Compilation is a pure function of the pattern string; a compiled pattern
/// is immutable and safe for unlimited concurrent read-only use.
///
/// # Example
///
/// ```
/// use readout_template::TemplatePattern;
///
/// let pattern = TemplatePattern::compile("{year}/{month}/{day}").unwrap();
/// assert_eq!(pattern.placeholders(), ["year", "month", "day"]);
///
/// let fields = pattern.parse("2020/01/15").unwrap();
/// assert_eq!(fields["year"], "2020");
/// assert_eq!(pattern.render(&fields).unwrap(), "2020/01/15");
/// ```
#[derive(Debug, Clone)]
pub struct TemplatePattern {
    raw: String,
    segments: Vec<Segment>,
    placeholders: Vec<String>,
    matcher: Regex,
}

impl TemplatePattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::UnclosedPlaceholder`] - a `{` with no `}`.
    /// - [`TemplateError::EmptyPlaceholder`] - `{}` or `{ }`.
    /// - [`TemplateError::AdjacentPlaceholders`] - `{a}{b}` with nothing
    ///   between the slots.
    pub fn compile(pattern: &str) -> Result<Self> {
        let segments = scan(pattern)?;

        let mut placeholders: Vec<String> = Vec::new();
        for segment in &segments {
            if let Segment::Placeholder(name) = segment {
                if !placeholders.iter().any(|p| p == name) {
                    placeholders.push(name.clone());
                }
            }
        }

        let mut source = String::from("^");
        for segment in &segments {
            match segment {
                Segment::Literal(text) => source.push_str(&regex::escape(text)),
                Segment::Placeholder(_) => source.push_str("(.+)"),
            }
        }
        source.push('$');

        let matcher = Regex::new(&source).map_err(|source| TemplateError::BadPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            placeholders,
            matcher,
        })
    }

    /// Returns the raw pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in first-seen order, duplicates collapsed.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// The compiled segment sequence.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Extracts fields from a conforming string.
    ///
    /// A placeholder that occurs more than once in the pattern must capture
    /// identical text at every occurrence.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Mismatch`] if the text does not conform. No
    /// matching-engine error type leaks out of this call.
    pub fn parse(&self, text: &str) -> Result<BTreeMap<String, String>> {
        let mismatch = || TemplateError::Mismatch {
            pattern: self.raw.clone(),
            text: text.to_string(),
        };

        let captures = self.matcher.captures(text).ok_or_else(mismatch)?;

        let mut fields = BTreeMap::new();
        let mut group = 0;
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                group += 1;
                // Anchored match with one group per placeholder: the group
                // is always present.
                let value = captures
                    .get(group)
                    .map(|m| m.as_str().to_string())
                    .ok_or_else(mismatch)?;
                match fields.get(name.as_str()) {
                    Some(previous) if previous != &value => return Err(mismatch()),
                    _ => {
                        fields.insert(name.clone(), value);
                    }
                }
            }
        }
        Ok(fields)
    }

    /// Renders fields back through the pattern.
    ///
    /// # Errors
    ///
    /// [`TemplateError::MissingField`] if a placeholder has no value.
    pub fn render(&self, fields: &BTreeMap<String, String>) -> Result<String> {
        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = fields.get(name).ok_or_else(|| {
                        TemplateError::MissingField { name: name.clone() }
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Scans a pattern into segments, merging literal runs.
fn scan(pattern: &str) -> Result<Vec<Segment>> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    name.push(inner);
                }
                if !closed {
                    return Err(TemplateError::UnclosedPlaceholder {
                        pattern: pattern.to_string(),
                    });
                }
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder {
                        pattern: pattern.to_string(),
                    });
                }
                if literal.is_empty() {
                    if let Some(Segment::Placeholder(first)) = segments.last() {
                        return Err(TemplateError::AdjacentPlaceholders {
                            first: first.clone(),
                            second: name,
                        });
                    }
                } else {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            // A stray closing brace is literal text, mirroring the
            // renderer's treatment.
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
