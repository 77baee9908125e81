//! Format function factory: one rule + the null fallback = one callable.
//!
//! [`build_format_fn`] wraps a [`FormatRule`] into a [`FormatFn`] that
//! applies the uniform null policy before the rule body ever runs. A
//! transform therefore never observes null-like input.

use std::sync::Arc;

use crate::error::FormatError;
use crate::pattern::DisplayPattern;
use crate::value::Scalar;

/// Keyword-style arguments bound to a transform rule at construction time.
///
/// Bound once when the rule is registered; the registry never re-binds them
/// per call.
pub type ExtraArgs = serde_json::Map<String, serde_json::Value>;

/// A transform: value plus bound arguments to display string.
pub type TransformFn = fn(&Scalar, &ExtraArgs) -> Result<String, FormatError>;

/// A derived format callable.
///
/// Cheap to clone and safe to call concurrently from any number of threads.
pub type FormatFn = Arc<dyn Fn(&Scalar) -> Result<String, FormatError> + Send + Sync>;

/// The body of a named format rule: a display pattern or a transform.
#[derive(Debug, Clone)]
pub enum FormatRule {
    /// Substitute the value into a single-placeholder display pattern.
    Pattern(DisplayPattern),
    /// Call a transform with arguments bound at registration.
    Transform { call: TransformFn, args: ExtraArgs },
}

impl FormatRule {
    /// Builds a pattern rule from a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BadPattern`](crate::ConfigError::BadPattern)
    /// for a malformed pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use readout_format::FormatRule;
    ///
    /// let rule = FormatRule::pattern("${:,.2f}").unwrap();
    /// ```
    pub fn pattern(pattern: &str) -> Result<Self, crate::ConfigError> {
        Ok(FormatRule::Pattern(DisplayPattern::parse(pattern)?))
    }

    /// Builds a transform rule with no extra arguments.
    pub fn transform(call: TransformFn) -> Self {
        FormatRule::Transform {
            call,
            args: ExtraArgs::new(),
        }
    }

    /// Builds a transform rule with extra arguments bound now.
    ///
    /// # Example
    ///
    /// ```
    /// use readout_format::{FormatError, FormatRule, Scalar, scale_number};
    ///
    /// fn wide(value: &Scalar, args: &readout_format::ExtraArgs) -> Result<String, FormatError> {
    ///     let num = value.as_f64().ok_or_else(|| FormatError::type_mismatch("number", value))?;
    ///     let dp = args.get("decimal_places").and_then(|v| v.as_u64()).unwrap_or(2);
    ///     Ok(scale_number(num, dp as usize))
    /// }
    ///
    /// let mut args = readout_format::ExtraArgs::new();
    /// args.insert("decimal_places".into(), 4u64.into());
    /// let rule = FormatRule::transform_with(wide, args);
    /// ```
    pub fn transform_with(call: TransformFn, args: ExtraArgs) -> Self {
        FormatRule::Transform { call, args }
    }
}

/// Derives the callable for a rule, closing over the null fallback.
///
/// The null short-circuit runs first: null-like input ([`Scalar::Null`],
/// empty string, NaN) returns the fallback without evaluating the rule.
pub fn build_format_fn(rule: FormatRule, null_format: &str) -> FormatFn {
    let null_format = null_format.to_string();
    match rule {
        FormatRule::Pattern(pattern) => Arc::new(move |value: &Scalar| {
            if value.is_null_like() {
                return Ok(null_format.clone());
            }
            pattern.apply(value)
        }),
        FormatRule::Transform { call, args } => Arc::new(move |value: &Scalar| {
            if value.is_null_like() {
                return Ok(null_format.clone());
            }
            call(value, &args)
        }),
    }
}
