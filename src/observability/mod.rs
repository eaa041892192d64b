//! Observability for the validator
//!
//! Events are emitted with `tracing`; the binary installs a
//! `tracing-subscriber` formatter once at startup.

mod logger;

pub use logger::{init_logging, LogFormat, DEFAULT_DIRECTIVE};
