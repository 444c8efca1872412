// src/logging.rs
//
// Structured logging setup. `RUST_LOG` overrides the default filter,
// e.g. `RUST_LOG=hovergrid=trace` to see every hover event.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hovergrid=info,warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a subscriber may already be installed (tests, embedding apps)
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
