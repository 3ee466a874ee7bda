//! fieldcheck - declarative, schema-driven validation of JSON records
//!
//! ```
//! use fieldcheck::schema::{validate, FieldSchema, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("name", FieldSchema::required_string().min_length(3))
//!     .field("status", FieldSchema::optional_string().one_of(["active", "inactive"]));
//!
//! assert!(validate(&json!({ "name": "Ana" }), &schema).is_ok());
//! let err = validate(&json!({ "name": "" }), &schema).unwrap_err();
//! assert_eq!(err.message(), "The field name is required");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use schema::{validate, FieldSchema, Schema, SchemaRegistry, TypeTag, ValidationError};
