//! JSON I/O handling for CLI
//!
//! - Input: one JSON record from a file or stdin
//! - Output: one JSON object per command, written to the given writer
//! - Logs go to stderr so stdout stays machine-readable

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::error::{Error, Result};

/// Read a JSON record from `path`, or from stdin when `None`
pub fn read_record(path: Option<&Path>) -> Result<Value> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if content.trim().is_empty() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Empty input",
        )));
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> Result<()> {
    let mut response = json!({ "status": "ok" });
    if !data.is_null() {
        response["data"] = data;
    }
    write_json(out, &response)
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> Result<()> {
    write_json(
        out,
        &json!({
            "status": "error",
            "code": code,
            "message": message
        }),
    )
}

/// Write one JSON object as a single line
fn write_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
