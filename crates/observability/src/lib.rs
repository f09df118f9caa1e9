//! Process-wide logging setup.
//!
//! Libraries in this workspace only emit `tracing` events; the embedding
//! application calls [`init`] once at startup to decide where they go.

/// Initialize JSON logging with the default `info` filter.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    tracing::init_with_default(tracing::DEFAULT_FILTER);
}

pub mod tracing;
