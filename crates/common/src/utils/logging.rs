use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the fallback filter used when `RUST_LOG` is not set.
fn default_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug,tower_http=debug,axum=info")
    } else {
        EnvFilter::new("info,tower_http=info,axum=info")
    }
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info` (or `debug` when `debug` is true)
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set
/// - Emits structured JSON logs for better machine parsing
pub fn init_logging_json(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the output format from `LOG_FORMAT` (`json` or anything else for compact text).
pub fn init_logging_from_env(debug: bool) {
    match std::env::var("LOG_FORMAT") {
        Ok(v) if v.eq_ignore_ascii_case("json") => init_logging_json(debug),
        _ => init_logging_default(debug),
    }
}
