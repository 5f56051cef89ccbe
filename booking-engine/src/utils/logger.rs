//! Logging Infrastructure
//!
//! The engine itself only emits `tracing` events. Hosts that do not install
//! their own subscriber can use these helpers.

use crate::core::EngineConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`, ignoring an already-installed subscriber
pub fn init_logger() {
    if let Err(e) = try_init_logger("info", false) {
        tracing::debug!(error = %e, "Logger already initialized");
    }
}

/// Initialize from `LOG_LEVEL` / `LOG_JSON` of the engine config
pub fn init_logger_with_config(config: &EngineConfig) -> anyhow::Result<()> {
    try_init_logger(&config.log_level, config.log_json)
}

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. Fails if a global subscriber is
/// already set.
pub fn try_init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = if json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init_logger_with_config(&EngineConfig::default());
        assert!(try_init_logger("debug", true).is_err());
        // Must not panic
        init_logger();
    }
}
