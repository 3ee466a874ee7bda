//! CLI command implementations
//!
//! Each command prints exactly one JSON object to stdout. A rejected record
//! is a normal outcome, not an error: it is reported on stdout and mapped to
//! its own exit code by `main`.

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::config::Config;
use crate::error::Result;
use crate::schema::{load_schema_file, NamedSchema, SchemaError, SchemaRegistry, SchemaValidator};

use super::args::Command;
use super::io::{read_record, write_error, write_response};

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded
    Accepted,
    /// The record broke a rule
    Rejected,
}

impl Outcome {
    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Accepted => 0,
            Outcome::Rejected => 2,
        }
    }
}

/// Builds the registry: built-in schemas plus the configured schema directory.
pub fn build_registry(config: &Config) -> Result<SchemaRegistry> {
    let mut registry = SchemaRegistry::with_builtins();
    if let Some(dir) = &config.schema_dir {
        registry.load_dir(dir)?;
    }
    Ok(registry)
}

/// Execute a CLI command, writing its response to stdout
pub fn run_command(command: Command, config: &Config) -> Result<Outcome> {
    let mut out = io::stdout().lock();
    match command {
        Command::Validate { schema, record } => {
            let registry = build_registry(config)?;
            validate(&mut out, &registry, &schema, record.as_deref())
        }
        Command::Schemas => {
            let registry = build_registry(config)?;
            schemas(&mut out, &registry)
        }
        Command::CheckSchema { path } => check_schema(&mut out, &path),
    }
}

/// Resolves `schema` as a registered name first, then as a schema file path.
pub fn resolve_schema(registry: &SchemaRegistry, schema: &str) -> Result<NamedSchema> {
    if let Some(named) = registry.get(schema) {
        return Ok(named.clone());
    }
    let path = Path::new(schema);
    if path.is_file() {
        return Ok(load_schema_file(path)?);
    }
    Err(SchemaError::unknown_schema(schema).into())
}

/// Validate one record
pub fn validate<W: Write>(
    out: &mut W,
    registry: &SchemaRegistry,
    schema: &str,
    record: Option<&Path>,
) -> Result<Outcome> {
    let named = resolve_schema(registry, schema)?;
    let record = read_record(record)?;

    match SchemaValidator::new(&named.fields).validate(&record) {
        Ok(()) => {
            tracing::info!(schema = %named.name, "record accepted");
            write_response(out, serde_json::Value::Null)?;
            Ok(Outcome::Accepted)
        }
        Err(err) => {
            tracing::info!(schema = %named.name, error = %err, "record rejected");
            write_error(out, err.code().code(), err.message())?;
            Ok(Outcome::Rejected)
        }
    }
}

/// List registered schemas
pub fn schemas<W: Write>(out: &mut W, registry: &SchemaRegistry) -> Result<Outcome> {
    let names: Vec<&str> = registry.names().collect();
    write_response(out, json!({ "schemas": names }))?;
    Ok(Outcome::Accepted)
}

/// Check a schema file
pub fn check_schema<W: Write>(out: &mut W, path: &Path) -> Result<Outcome> {
    let named = load_schema_file(path)?;
    write_response(
        out,
        json!({
            "schema": named.name,
            "fields": named.fields.len()
        }),
    )?;
    Ok(Outcome::Accepted)
}
