//! CLI command implementations

use std::path::Path;

use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::engine::{validate, Outcome};
use crate::http_server::HttpServer;
use crate::middleware::{ErrorReply, JsonBodyValidatorLayer};
use crate::observability::init_logging;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_body, write_error, write_response};

/// Parse arguments, install logging and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_format);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Check { config } => report_failure(check(&config)),
        Command::Validate { config, body } => {
            report_failure(validate_body(&config, body.as_deref()))
        }
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Echo a failed command's error envelope to stdout, then pass it on
fn report_failure(result: CliResult<()>) -> CliResult<()> {
    if let Err(e) = &result {
        write_error(e.code_str(), e.message())?;
    }
    result
}

/// Load `config_path` and compile its middleware section
fn load_layer(config_path: &Path) -> CliResult<(AppConfig, JsonBodyValidatorLayer)> {
    let config = AppConfig::load(config_path)?;
    let layer = JsonBodyValidatorLayer::new(config.middleware.clone())?;
    Ok((config, layer))
}

/// Compile a configuration and print a summary of its rules
pub fn check(config_path: &Path) -> CliResult<()> {
    write_response(check_report(config_path)?)
}

/// Summary of a compiled configuration: name, fields in evaluation order and
/// the error response it produces
pub fn check_report(config_path: &Path) -> CliResult<Value> {
    let (_, layer) = load_layer(config_path)?;
    let rules = layer.rules();

    let fields: Vec<&str> = rules.iter().map(|rule| rule.field()).collect();

    Ok(json!({
        "name": layer.name(),
        "evaluation": rules.order(),
        "rules": fields,
        "status": layer.reply().status().as_u16(),
        "code": layer.reply().code(),
    }))
}

/// Validate one body and print the outcome.
///
/// A failing body is a successful command run; only configuration and I/O
/// problems are errors.
pub fn validate_body(config_path: &Path, body_path: Option<&Path>) -> CliResult<()> {
    let body = read_body(body_path)?;
    write_response(validate_report(config_path, &body)?)
}

/// Outcome report for `body` under the configuration at `config_path`
pub fn validate_report(config_path: &Path, body: &[u8]) -> CliResult<Value> {
    let (_, layer) = load_layer(config_path)?;
    let outcome = validate(Some(body), layer.rules());
    Ok(outcome_json(&outcome, layer.reply()))
}

/// JSON report of an outcome, mirroring what an HTTP client would receive
pub fn outcome_json(outcome: &Outcome, reply: &ErrorReply) -> Value {
    match outcome {
        Outcome::Pass => json!({"outcome": "pass"}),
        Outcome::Fail(violation) => {
            let mut report = json!({
                "outcome": "fail",
                "status": reply.status().as_u16(),
                "error": violation.to_string(),
            });
            if let (Some(code), Some(obj)) = (reply.code(), report.as_object_mut()) {
                obj.insert("code".to_string(), Value::from(code));
            }
            report
        }
    }
}

/// Start the demo HTTP server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (config, layer) = load_layer(config_path)?;

    let mut server_config = config.server;
    if let Some(port) = port {
        server_config.port = port;
    }

    let server = HttpServer::new(server_config, layer);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
