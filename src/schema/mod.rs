//! Declarative record validation
//!
//! A `Schema` maps field names to rule configuration. `validate` checks a
//! JSON record against it and stops at the first violation.
//!
//! # Design Principles
//!
//! - Fields in declaration order, rules in fixed priority
//! - First failure wins; no aggregated reports
//! - No mutation, coercion, or defaults
//! - Deterministic messages, identical for nested and top-level fields

pub mod customer;
mod date;
mod errors;
mod registry;
mod rules;
mod types;
mod validator;

pub use date::{is_valid_date, parse_date};
pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity, ValidationError};
pub use registry::{load_schema_file, NamedSchema, SchemaRegistry};
pub use rules::Rule;
pub use types::{FieldSchema, Format, ItemsSchema, Schema, TypeTag};
pub use validator::{validate, validate_field, SchemaValidator};
