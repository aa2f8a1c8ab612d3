//! Structured logging setup for the server binary
//!
//! Maps the `-v` flag count onto a default level filter; `RUST_LOG` wins when
//! set so operators can scope modules without recompiling.

use tracing_subscriber::EnvFilter;

/// Level implied by the verbosity flag when `RUST_LOG` is not set.
pub fn level_for_verbosity(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize the global tracing subscriber.
pub fn init(verbosity: u8, configured_level: &str) {
    let fallback = level_for_verbosity(verbosity, configured_level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
