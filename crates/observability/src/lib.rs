//! Tracing/logging setup shared by processes embedding the booking store.

/// Log subscriber configuration.
pub mod tracing;

pub use crate::tracing::{LogConfig, LogFormat};

/// Initialize process-wide logging with JSON output at `info`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(LogConfig::default());
}

/// Initialize process-wide logging with an explicit configuration.
pub fn init_with(config: LogConfig) {
    tracing::init(config);
}
