//! # Readout Format - Named display formatting for scalar values
//!
//! `readout-format` turns raw scalar values (numbers, money amounts,
//! durations, ratios) into human-readable strings under a pluggable, named
//! configuration of format rules with uniform null handling.
//!
//! ## Core Concepts
//!
//! - [`Scalar`]: the runtime value handed to every format function
//! - [`FormatRule`]: a rule body - a display pattern or a transform
//! - [`Formatters`]: an immutable registry of named format callables, built
//!   once from overridable defaults plus caller-supplied rules
//! - Null policy: null-like input (null, empty string, NaN) short-circuits
//!   to the configured fallback before any rule body runs
//!
//! ## Quick Start
//!
//! ```rust
//! use readout_format::{Formatters, Scalar};
//!
//! let formatters = Formatters::builder().null_format("-").build().unwrap();
//!
//! assert_eq!(formatters.format("dollars", &Scalar::Float(1500.0)).unwrap(), "$1,500");
//! assert_eq!(formatters.format("big_number", &Scalar::Float(1_250_000.0)).unwrap(), "1.25M");
//! assert_eq!(formatters.format("percent", &Scalar::Float(0.25)).unwrap(), "25%");
//! assert_eq!(formatters.format("minutes", &Scalar::Float(5.5)).unwrap(), "05:30");
//! assert_eq!(formatters.format("dollars", &Scalar::Null).unwrap(), "-");
//! ```
//!
//! ## Configuration
//!
//! Every configured rule name ends in the reserved `_format` suffix and is
//! exposed under the suffix-stripped short name. Defaults can be overridden
//! and arbitrary extensions added:
//!
//! ```rust
//! use readout_format::{Formatters, Scalar};
//!
//! let formatters = Formatters::builder()
//!     .pattern("percent_format", "{:.1%}")      // override
//!     .pattern("basis_points_format", "{:.0f}bps") // extension
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(formatters.format("percent", &Scalar::Float(0.1234)).unwrap(), "12.3%");
//! assert_eq!(formatters.format("basis_points", &Scalar::Float(42.0)).unwrap(), "42bps");
//! ```
//!
//! Names missing the suffix fail at `build()` - a malformed configuration
//! never yields a registry.

mod error;
mod factory;
mod numeric;
mod pattern;
mod registry;
mod value;

// Re-export public API
pub use error::{ConfigError, FormatError, Result};
pub use factory::{build_format_fn, ExtraArgs, FormatFn, FormatRule, TransformFn};
pub use numeric::{as_multiple, format_clock, format_minutes, scale_dollars, scale_number};
pub use pattern::DisplayPattern;
pub use registry::{Formatters, FormattersBuilder, RULE_SUFFIX};
pub use value::{Scalar, TimeOfDay};
