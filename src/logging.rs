//! Structured logging setup
//!
//! Log output goes to stderr and is filtered with `RUST_LOG`, e.g.
//! ```bash
//! RUST_LOG=stackchart_studio=debug cargo run
//! ```
//! Without `RUST_LOG` this crate logs at `info` and everything else at `warn`.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging() {
    init_logging_with_level("info")
}

/// Initialize logging with a specific level for this crate
///
/// # Arguments
/// * `level` - Log level: "trace", "debug", "info", "warn", or "error"
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("warn,{}={}", env!("CARGO_PKG_NAME"), level).into());

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        tracing::info!("logging initialized at level: {}", level);
    }
}
