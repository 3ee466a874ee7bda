//! Named schema registry
//!
//! - Schemas are registered once under a unique name and never replaced
//! - Schema files live in a directory, one `*.json` file per record type
//! - Malformed schema files fail the load; non-JSON files are skipped

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::customer;
use super::errors::{SchemaError, SchemaResult, ValidationError};
use super::types::Schema;
use super::validator;

/// Schema for one logical record type, as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSchema {
    /// Unique record type name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field table
    pub fields: Schema,
}

impl NamedSchema {
    pub fn new(name: impl Into<String>, fields: Schema) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates the schema structure itself (not a record)
    pub fn check_structure(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("schema name must not be empty".into());
        }
        self.fields.check_structure()
    }
}

/// Reads and checks a single schema file.
pub fn load_schema_file(path: &Path) -> SchemaResult<NamedSchema> {
    let source = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| {
        SchemaError::malformed_schema(&source, format!("Failed to read file: {}", e))
    })?;

    let schema: NamedSchema = serde_json::from_str(&content)
        .map_err(|e| SchemaError::malformed_schema(&source, format!("Invalid JSON: {}", e)))?;

    schema
        .check_structure()
        .map_err(|e| SchemaError::malformed_schema(&source, e))?;

    Ok(schema)
}

/// In-memory registry of record schemas, keyed by name
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, NamedSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in record schemas.
    pub fn with_builtins() -> Self {
        let mut schemas = BTreeMap::new();
        let customer = NamedSchema::new(customer::CUSTOMER_SCHEMA, customer::schema())
            .with_description("Create-customer payload");
        schemas.insert(customer.name.clone(), customer);
        Self { schemas }
    }

    /// Registers a schema.
    ///
    /// # Errors
    ///
    /// Fails if the schema is malformed or the name is already taken.
    pub fn register(&mut self, schema: NamedSchema) -> SchemaResult<()> {
        schema
            .check_structure()
            .map_err(|e| SchemaError::malformed_schema("<in-memory>", e))?;

        if self.schemas.contains_key(&schema.name) {
            return Err(SchemaError::schema_immutable(&schema.name));
        }

        tracing::info!(schema = %schema.name, fields = schema.fields.len(), "schema registered");
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Loads every `*.json` schema file in `dir`, returning how many were added.
    ///
    /// A missing directory loads nothing.
    pub fn load_dir(&mut self, dir: &Path) -> SchemaResult<usize> {
        if !dir.exists() {
            tracing::warn!(dir = %dir.display(), "schema directory does not exist");
            return Ok(0);
        }

        let source = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|e| {
            SchemaError::malformed_schema(
                &source,
                format!("Failed to read schema directory: {}", e),
            )
        })?;

        // Sorted so that a duplicate name is always reported on the same file.
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed_schema(
                    &source,
                    format!("Failed to read directory entry: {}", e),
                )
            })?;
            paths.push(entry.path());
        }
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            if path.extension().map_or(true, |ext| ext != "json") {
                tracing::debug!(path = %path.display(), "skipping non-json file");
                continue;
            }
            let schema = load_schema_file(&path)?;
            self.register(schema)?;
            loaded += 1;
        }

        tracing::info!(dir = %source, loaded, "schema directory loaded");
        Ok(loaded)
    }

    /// Gets a schema by name.
    pub fn get(&self, name: &str) -> Option<&NamedSchema> {
        self.schemas.get(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validates a record against the named schema.
    ///
    /// # Errors
    ///
    /// The outer error is `UnknownSchema`; the inner one is the rule violation.
    pub fn validate(
        &self,
        name: &str,
        record: &Value,
    ) -> SchemaResult<Result<(), ValidationError>> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::unknown_schema(name))?;
        Ok(validator::SchemaValidator::new(&schema.fields).validate(record))
    }
}
