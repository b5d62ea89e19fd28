use std::time::Duration;

use mindset_domain::MindsetError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_FORMAT_VAR: &str = "MINDSET_LOG_FORMAT";

/// Install the global subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). Set `MINDSET_LOG_FORMAT=json`
/// for JSON lines. Output goes to stderr so command output stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = if json { builder.json().try_init() } else { builder.try_init() };
    if let Err(err) = result {
        eprintln!("tracing already initialised: {err}");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"journal::add"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&MindsetError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, success = true, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            success = false,
            error_type = err.label(),
            error = %err,
            "command_execution_failure"
        ),
    }
}
