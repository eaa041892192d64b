//! I/O handling for CLI
//!
//! - Input: raw body bytes from a file or stdin
//! - Output: single JSON object via stdout

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Read a body from `path`, or all of stdin when no path is given
pub fn read_body(path: Option<&Path>) -> CliResult<Vec<u8>> {
    read_body_from(path, io::stdin().lock())
}

/// Read a body from `path`, falling back to `input` when no path is given
pub fn read_body_from<R: Read>(path: Option<&Path>, mut input: R) -> CliResult<Vec<u8>> {
    match path {
        Some(path) => fs::read(path)
            .map_err(|e| CliError::io_error(format!("Failed to read body {:?}: {}", path, e))),
        None => {
            let mut body = Vec::new();
            input.read_to_end(&mut body)?;
            Ok(body)
        }
    }
}

/// Success envelope
pub fn ok_envelope(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

/// Error envelope
pub fn error_envelope(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&mut io::stdout(), &ok_envelope(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&mut io::stdout(), &error_envelope(code, message))
}

/// Write `value` as one JSON line
pub fn write_line<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
