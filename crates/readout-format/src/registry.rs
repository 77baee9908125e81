//! The formatter registry: named rules in, named callables out.
//!
//! A [`Formatters`] registry is built once from nine overridable defaults
//! plus any caller-supplied rules, and is read-only afterward. Every
//! configured name must end in the reserved `_format` suffix; the derived
//! callable is exposed under the suffix-stripped short name
//! (`dollars_format` -> `dollars`).
//!
//! # Example
//!
//! ```
//! use readout_format::{Formatters, FormatRule, Scalar};
//!
//! let formatters = Formatters::builder()
//!     .null_format("-")
//!     .pattern("dollars_format", "${:,.2f}")   // override a default
//!     .pattern("bps_format", "{:.0f}bps")      // add an extension
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(formatters.format("dollars", &Scalar::Float(1500.0)).unwrap(), "$1,500.00");
//! assert_eq!(formatters.format("bps", &Scalar::Float(25.0)).unwrap(), "25bps");
//! assert_eq!(formatters.format("dollars", &Scalar::Null).unwrap(), "-");
//! ```

use std::collections::BTreeMap;

use crate::error::{ConfigError, FormatError};
use crate::factory::{build_format_fn, ExtraArgs, FormatFn, FormatRule};
use crate::numeric::{as_multiple, format_clock, format_minutes, scale_dollars, scale_number};
use crate::value::Scalar;

/// Reserved suffix every configured rule name must carry.
pub const RULE_SUFFIX: &str = "_format";

/// Name under which the null fallback would collide with rule derivation.
const NULL_RULE_NAME: &str = "null_format";

/// A rule as registered on the builder, before derivation.
#[derive(Debug, Clone)]
enum Pending {
    /// Pattern string, parsed at `build()` so the failure is definition-time.
    Pattern(String),
    /// Ready-made rule body.
    Rule(FormatRule),
}

/// Builder for [`Formatters`].
///
/// Starts pre-populated with the default rules; `pattern`/`rule` calls
/// override defaults or add extensions. Validation happens in
/// [`build`](FormattersBuilder::build) - a malformed name or pattern yields
/// a [`ConfigError`] and no registry.
#[derive(Debug, Clone)]
pub struct FormattersBuilder {
    null_format: String,
    rules: BTreeMap<String, Pending>,
}

impl FormattersBuilder {
    fn new() -> Self {
        let mut rules = BTreeMap::new();
        let mut pattern = |name: &str, p: &str| {
            rules.insert(name.to_string(), Pending::Pattern(p.to_string()));
        };
        pattern("dollars_format", "${:,.0f}");
        pattern("percent_format", "{:.0%}");
        pattern("percent2dp_format", "{:.2%}");
        pattern("number_format", "{:,.0f}");
        pattern("small_number_format", "{:.2f}");

        let mut transform = |name: &str, rule: FormatRule| {
            rules.insert(name.to_string(), Pending::Rule(rule));
        };
        transform("big_number_format", FormatRule::transform(scaled_number));
        transform("big_dollars_format", FormatRule::transform(scaled_dollars));
        transform("multiple_format", FormatRule::transform(multiple));
        transform("minutes_format", FormatRule::transform(minutes));

        Self {
            null_format: String::new(),
            rules,
        }
    }

    /// Sets the uniform null fallback string (default: empty).
    pub fn null_format(mut self, null_format: impl Into<String>) -> Self {
        self.null_format = null_format.into();
        self
    }

    /// Registers a display-pattern rule under `name`.
    ///
    /// The pattern is parsed at `build()`, so a malformed pattern fails the
    /// whole construction rather than the first call.
    pub fn pattern(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.rules
            .insert(name.into(), Pending::Pattern(pattern.into()));
        self
    }

    /// Registers a rule body under `name`.
    pub fn rule(mut self, name: impl Into<String>, rule: FormatRule) -> Self {
        self.rules.insert(name.into(), Pending::Rule(rule));
        self
    }

    /// Validates every name, derives the callables, and freezes the
    /// registry.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::BadRuleName`] - a name without the `_format` suffix
    ///   (or nothing before it).
    /// - [`ConfigError::ReservedRuleName`] - `null_format` registered as a
    ///   rule; the fallback is not a callable.
    /// - [`ConfigError::BadPattern`] - a malformed pattern string.
    pub fn build(self) -> Result<Formatters, ConfigError> {
        let mut derived: BTreeMap<String, FormatFn> = BTreeMap::new();
        for (name, pending) in self.rules {
            if name == NULL_RULE_NAME {
                return Err(ConfigError::ReservedRuleName { name });
            }
            let short = match name.strip_suffix(RULE_SUFFIX) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => return Err(ConfigError::BadRuleName { name }),
            };
            let rule = match pending {
                Pending::Pattern(p) => FormatRule::pattern(&p)?,
                Pending::Rule(r) => r,
            };
            derived.insert(short, build_format_fn(rule, &self.null_format));
        }
        Ok(Formatters {
            null_format: self.null_format,
            rules: derived,
        })
    }
}

/// An immutable set of named format callables.
///
/// Built once via [`Formatters::builder`]; safe for unlimited concurrent
/// read-only use afterward.
#[derive(Clone)]
pub struct Formatters {
    null_format: String,
    rules: BTreeMap<String, FormatFn>,
}

impl Formatters {
    /// Starts a builder pre-populated with the default rules.
    pub fn builder() -> FormattersBuilder {
        FormattersBuilder::new()
    }

    /// Looks up a derived callable by short name.
    pub fn get(&self, name: &str) -> Option<&FormatFn> {
        self.rules.get(name)
    }

    /// Formats a value through the named rule.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnknownRule`] for an unregistered name; otherwise
    /// whatever the rule body returns.
    pub fn format(&self, name: &str, value: &Scalar) -> Result<String, FormatError> {
        let f = self.rules.get(name).ok_or_else(|| FormatError::UnknownRule {
            name: name.to_string(),
        })?;
        f(value)
    }

    /// The configured null fallback.
    pub fn null_format(&self) -> &str {
        &self.null_format
    }

    /// Iterates the registered short names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|s| s.as_str())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for Formatters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatters")
            .field("null_format", &self.null_format)
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Reads `decimal_places` from bound args, defaulting to 2.
fn decimal_places(args: &ExtraArgs) -> usize {
    args.get("decimal_places")
        .and_then(|v| v.as_u64())
        .unwrap_or(2) as usize
}

fn scaled_number(value: &Scalar, args: &ExtraArgs) -> Result<String, FormatError> {
    let num = value
        .as_f64()
        .ok_or_else(|| FormatError::type_mismatch("number", value))?;
    Ok(scale_number(num, decimal_places(args)))
}

fn scaled_dollars(value: &Scalar, args: &ExtraArgs) -> Result<String, FormatError> {
    let num = value
        .as_f64()
        .ok_or_else(|| FormatError::type_mismatch("number", value))?;
    Ok(scale_dollars(num, decimal_places(args)))
}

fn multiple(value: &Scalar, _args: &ExtraArgs) -> Result<String, FormatError> {
    let num = value
        .as_f64()
        .ok_or_else(|| FormatError::type_mismatch("number", value))?;
    Ok(as_multiple(num))
}

fn minutes(value: &Scalar, _args: &ExtraArgs) -> Result<String, FormatError> {
    if let Some(t) = value.as_time() {
        return Ok(format_clock(t));
    }
    let num = value
        .as_f64()
        .ok_or_else(|| FormatError::type_mismatch("number or time", value))?;
    Ok(format_minutes(num))
}
