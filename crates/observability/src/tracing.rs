//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Default directive used when neither `RUST_LOG` nor the caller gives one.
pub const DEFAULT_FILTER: &str = "info";

/// Install the JSON subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with_default(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}
