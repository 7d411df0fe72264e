//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for cloud monitoring
//! - Sandbox: Colorful, human-readable logs for development

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: this crate at `info`, dependencies
/// at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn,tvscanner=info";

/// Initialize logging based on the environment
///
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`]; set it to
/// `tvscanner=debug` to see per-indicator classifications and, with
/// `SCANNER_DEBUG=1`, raw request/response dumps.
pub fn init_logging() {
    let env = get_environment();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let is_production = matches!(env.as_str(), "production" | "prod");

    // Logs go to stderr so stdout stays clean for command output.
    if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
