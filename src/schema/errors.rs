//! Schema error types
//!
//! Error codes:
//! - FIELDCHECK_VALIDATION_FAILED (REJECT)
//! - FIELDCHECK_UNKNOWN_SCHEMA (REJECT)
//! - FIELDCHECK_SCHEMA_IMMUTABLE (FATAL)
//! - FIELDCHECK_MALFORMED_SCHEMA (FATAL)
//!
//! A record that breaks a rule produces a `ValidationError`. Problems with
//! schemas themselves produce a `SchemaError` and are never reported as a
//! rule violation.

use std::fmt;

use thiserror::Error;

use super::types::TypeTag;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
    /// Configuration or programming fault
    Fatal,
}

impl Severity {
    /// HTTP-equivalent status class for callers that answer over HTTP
    pub fn status_code(&self) -> u16 {
        match self {
            Severity::Reject => 400,
            Severity::Fatal => 500,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Record violates a rule
    ValidationFailed,
    /// Schema name not registered
    UnknownSchema,
    /// Attempt to replace a registered schema
    SchemaImmutable,
    /// Schema file or definition is not well formed
    MalformedSchema,
}

impl SchemaErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::ValidationFailed => "FIELDCHECK_VALIDATION_FAILED",
            SchemaErrorCode::UnknownSchema => "FIELDCHECK_UNKNOWN_SCHEMA",
            SchemaErrorCode::SchemaImmutable => "FIELDCHECK_SCHEMA_IMMUTABLE",
            SchemaErrorCode::MalformedSchema => "FIELDCHECK_MALFORMED_SCHEMA",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::ValidationFailed | SchemaErrorCode::UnknownSchema => Severity::Reject,
            SchemaErrorCode::SchemaImmutable | SchemaErrorCode::MalformedSchema => Severity::Fatal,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A record violated a rule.
///
/// `Display` is the bare message. The message text is part of the public
/// contract and must reach end users unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error with an arbitrary message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn required(field: &str) -> Self {
        Self::new(format!("The field {} is required", field))
    }

    pub(crate) fn wrong_type(field: &str, expected: TypeTag) -> Self {
        Self::new(format!("The field {} must be a {}", field, expected))
    }

    pub(crate) fn too_short(field: &str, min_length: usize) -> Self {
        Self::new(format!(
            "The field {} must have at least {} characters",
            field, min_length
        ))
    }

    pub(crate) fn invalid_date(field: &str) -> Self {
        Self::new(format!(
            "The field {} must be a valid date. Format: DD/MM/YYYY",
            field
        ))
    }

    pub(crate) fn not_allowed(field: &str, allowed: &[String]) -> Self {
        Self::new(format!(
            "The field {} must be one of the allowed values: {}",
            field,
            allowed.join(", ")
        ))
    }

    pub(crate) fn not_array(field: &str) -> Self {
        Self::new(format!("The field {} must be an array", field))
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the message
    pub fn into_message(self) -> String {
        self.message
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        SchemaErrorCode::ValidationFailed
    }

    /// Always 400: a rule violation is the caller's fault
    pub fn status_code(&self) -> u16 {
        self.code().severity().status_code()
    }
}

/// Error raised while registering or loading schemas
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    schema: Option<String>,
}

impl SchemaError {
    /// Create an unknown schema error
    pub fn unknown_schema(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::UnknownSchema,
            message: format!("Schema '{}' not found", name),
            schema: Some(name),
        }
    }

    /// Create a schema immutable error
    pub fn schema_immutable(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::SchemaImmutable,
            message: format!("Schema '{}' is already registered and cannot be replaced", name),
            schema: Some(name),
        }
    }

    /// Create an error for a malformed schema file or definition
    pub fn malformed_schema(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::MalformedSchema,
            message: format!("Malformed schema '{}': {}", source.into(), reason.into()),
            schema: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the schema name if applicable
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SchemaErrorCode::ValidationFailed.code(),
            "FIELDCHECK_VALIDATION_FAILED"
        );
        assert_eq!(SchemaErrorCode::UnknownSchema.code(), "FIELDCHECK_UNKNOWN_SCHEMA");
        assert_eq!(
            SchemaErrorCode::SchemaImmutable.code(),
            "FIELDCHECK_SCHEMA_IMMUTABLE"
        );
        assert_eq!(
            SchemaErrorCode::MalformedSchema.code(),
            "FIELDCHECK_MALFORMED_SCHEMA"
        );
    }

    #[test]
    fn test_message_templates() {
        assert_eq!(
            ValidationError::required("name").message(),
            "The field name is required"
        );
        assert_eq!(
            ValidationError::wrong_type("age", TypeTag::Number).message(),
            "The field age must be a number"
        );
        assert_eq!(
            ValidationError::too_short("name", 3).message(),
            "The field name must have at least 3 characters"
        );
        assert_eq!(
            ValidationError::invalid_date("birthDate").message(),
            "The field birthDate must be a valid date. Format: DD/MM/YYYY"
        );
        assert_eq!(
            ValidationError::not_allowed("status", &["active".into(), "inactive".into()])
                .message(),
            "The field status must be one of the allowed values: active, inactive"
        );
        assert_eq!(
            ValidationError::not_array("items").message(),
            "The field items must be an array"
        );
    }

    #[test]
    fn test_validation_error_display_is_bare_message() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "The field name is required");
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(ValidationError::required("name").status_code(), 400);
        assert_eq!(SchemaError::unknown_schema("orders").severity().status_code(), 400);
        assert_eq!(
            SchemaError::malformed_schema("x.json", "bad").severity().status_code(),
            500
        );
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::schema_immutable("customer");
        let display = err.to_string();
        assert!(display.contains("FATAL"));
        assert!(display.contains("FIELDCHECK_SCHEMA_IMMUTABLE"));
        assert!(display.contains("customer"));
        assert_eq!(err.schema(), Some("customer"));
    }
}
