use thiserror::Error;

/// Env var holding the `tracing-subscriber` filter directive.
pub const FILTER_VAR: &str = "RUST_LOG";
/// Env var selecting the output format.
pub const FORMAT_VAR: &str = "PARKPASS_LOG_FORMAT";
/// Env var toggling event targets in the output.
pub const TARGET_VAR: &str = "PARKPASS_LOG_TARGET";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown log format `{value}` (expected json, pretty or compact)")]
    UnknownFormat { var: &'static str, value: String },

    #[error("{var}: expected true or false, got `{value}`")]
    InvalidBool { var: &'static str, value: String },
}

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl core::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ConfigError::UnknownFormat {
                var: FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Filter directive, e.g. `info` or `parkpass_people=debug`.
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or empty variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(filter) = get(FILTER_VAR) {
            config.filter = filter;
        }
        if let Some(format) = get(FORMAT_VAR) {
            config.format = format.parse()?;
        }
        if let Some(value) = get(TARGET_VAR) {
            config.with_target = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        var: TARGET_VAR,
                        value,
                    });
                }
            };
        }

        Ok(config)
    }
}
