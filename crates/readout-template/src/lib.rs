//! # Readout Template - Bidirectional string templating
//!
//! `readout-template` converts between flat strings and structured records
//! of named fields through a declared `{name}` pattern. The same pattern is
//! both the renderer (fields to string) and, once compiled, the parser
//! (string to fields), with a round-trip guarantee for unambiguous
//! patterns.
//!
//! Useful for path and partition-key conventions, report identifiers, and
//! any flat naming scheme that has to be produced and consumed.
//!
//! ## Core Concepts
//!
//! - [`TemplatePattern`]: a compiled pattern - ordered literal/placeholder
//!   segments plus an anchored matcher with escaped literals
//! - [`TemplateSchema`]: declared field names bound to one pattern,
//!   validated once at definition time
//! - [`TemplateRecord`]: an immutable field mapping whose canonical
//!   `string()` is always derived from the fields
//!
//! ## Quick Start
//!
//! ```rust
//! use readout_template::TemplateSchema;
//!
//! let schema = TemplateSchema::define(
//!     ["year", "month", "day"],
//!     "{year}/{month}/{day}",
//! ).unwrap();
//!
//! // string -> fields
//! let record = schema.from_string("2020/01/15").unwrap();
//! assert_eq!(record.get("month"), Some("01"));
//!
//! // fields -> string
//! let record = schema
//!     .from_fields([("year", "2020"), ("month", "01"), ("day", "15")])
//!     .unwrap();
//! assert_eq!(record.string(), "2020/01/15");
//! ```
//!
//! ## Failure Modes
//!
//! Schema definition fails eagerly - mismatched field/placeholder sets,
//! reserved or duplicate names, and ambiguous patterns (adjacent
//! placeholders) never produce a usable schema. Parsing non-conforming
//! text yields [`TemplateError::Mismatch`], a typed condition; no
//! matching-engine error leaks through.

mod error;
mod pattern;
mod schema;

// Re-export public API
pub use error::{Result, TemplateError};
pub use pattern::{Segment, TemplatePattern};
pub use schema::{TemplateRecord, TemplateSchema, RESERVED_FIELDS};
