//! CLI module for the JSON body validator
//!
//! Provides command-line interface for:
//! - check: Load and compile a configuration
//! - validate: Run the validator over one body
//! - serve: Start the demo server

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    check, check_report, outcome_json, run, run_command, serve, validate_body, validate_report,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{
    error_envelope, ok_envelope, read_body, read_body_from, write_error, write_line, write_response,
};
