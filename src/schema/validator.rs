//! Record validation
//!
//! Validation semantics:
//! - Fields are checked in schema declaration order
//! - Rules within a field run Required, Type, MinLength, DateFormat, Enum, ArrayItems
//! - The first failing rule ends the whole validation
//! - Array elements are validated in order against the item schema
//! - Nested failures are reported exactly like top-level ones
//!
//! Forbidden behaviors:
//! - Mutating the record
//! - Coercing values
//! - Collecting more than one violation

use serde_json::Value;

use super::errors::ValidationError;
use super::types::{FieldSchema, Schema};

/// Validates `record` against `schema`.
///
/// A record that is not a JSON object is treated as having no fields.
///
/// # Errors
///
/// Returns the first `ValidationError` in field order, then rule order.
pub fn validate(record: &Value, schema: &Schema) -> Result<(), ValidationError> {
    for (name, field) in schema.iter() {
        validate_field(name, field, record.get(name))?;
    }
    Ok(())
}

/// Runs one field's rule chain against its value.
///
/// `value` is `None` when the record has no such key.
pub fn validate_field(
    name: &str,
    field: &FieldSchema,
    value: Option<&Value>,
) -> Result<(), ValidationError> {
    for rule in field.rules() {
        rule.check(name, value)?;
    }
    Ok(())
}

/// Borrowing validator bound to one schema.
///
/// Schemas are immutable once built, so one `SchemaValidator` can be shared
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn validate(&self, record: &Value) -> Result<(), ValidationError> {
        validate(record, self.schema)
    }

    pub fn is_valid(&self, record: &Value) -> bool {
        validate(record, self.schema).is_ok()
    }
}
