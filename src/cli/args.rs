//! CLI argument definitions using clap
//!
//! Commands:
//! - json-body-validator check --config <path>
//! - json-body-validator validate --config <path> [--body <path>]
//! - json-body-validator serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// JSON body validator - reject HTTP requests whose JSON body breaks field rules
#[derive(Parser, Debug)]
#[command(name = "json-body-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and compile a configuration, then print its rules
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./validator.json")]
        config: PathBuf,
    },

    /// Validate one request body and print the outcome
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = "./validator.json")]
        config: PathBuf,

        /// File holding the body (reads stdin when omitted)
        #[arg(long)]
        body: Option<PathBuf>,
    },

    /// Start the demo HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./validator.json")]
        config: PathBuf,

        /// Overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
