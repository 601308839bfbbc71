// src/logging.rs
// =============================================================================
// Sets up where our log messages go.
//
// We log with the `tracing` macros (debug!, info!, warn!) everywhere else.
// This file installs the subscriber that actually prints them:
// - Always to stderr, so `--stdout` and `--json` output stays clean
// - Filtered by RUST_LOG if set, otherwise by how many -v flags were given
// - Optionally as one JSON object per line (--log-json)
// =============================================================================

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

// Maps the number of -v flags to a default filter directive
//   0 -> warn, 1 -> info, 2+ -> debug
fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

// Installs the global tracing subscriber.
//
// Only the first call in a process takes effect; later calls are ignored.
pub fn init_tracing(verbosity: u8, json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .ok();
    }
}
