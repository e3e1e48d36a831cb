//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let (config, error) = match ObservabilityConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (ObservabilityConfig::default(), Some(e)),
    };

    init_with(&config);

    if let Some(e) = error {
        ::tracing::warn!(error = %e, "invalid observability config; using defaults");
    }
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = ObservabilityConfig {
            filter: "debug".to_string(),
            format: LogFormat::Compact,
            with_target: true,
        };
        init_with(&config);
        assert!(!init_with(&config));
        init();
    }
}
