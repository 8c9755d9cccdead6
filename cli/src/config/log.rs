use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use super::Error;

/// Environment variables read by [`LogConfig`] start with this prefix.
pub const ENV_PREFIX: &str = "FACT_LOG";

/// Level used when neither `RUST_LOG` nor `FACT_LOG_LEVEL` is set.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Diagnostics settings, read from `FACT_LOG_*`.
///
/// These only affect what is written to stderr. `RUST_LOG` directives still
/// take precedence over `level`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Force ANSI colours on or off; detected from stderr when unset.
    pub ansi: Option<bool>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            ansi: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self, Error> {
        Ok(::config::Config::builder()
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("_"))
            .build()?
            .try_deserialize()?)
    }

    /// Reads and validates the settings, falling back to defaults on any error.
    ///
    /// The error, if any, is handed back so it can be logged once a subscriber
    /// is installed.
    pub fn from_env_or_default() -> (Self, Option<Error>) {
        match Self::from_env().and_then(|config| config.level_filter().map(|_| config)) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, Error> {
        self.level
            .parse()
            .map_err(|_| Error::InvalidLevel(self.level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("FACT_LOG_LEVEL");
        std::env::remove_var("FACT_LOG_ANSI");
    }

    #[test]
    #[serial]
    fn read_default_config() {
        clear_env();

        let config = LogConfig::from_env().unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level_filter().unwrap(), DEFAULT_LEVEL);
    }

    #[test]
    #[serial]
    fn read_config() {
        clear_env();
        std::env::set_var("FACT_LOG_LEVEL", "debug");
        std::env::set_var("FACT_LOG_ANSI", "false");

        let config = LogConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.level_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(config.ansi, Some(false));
    }

    #[test]
    #[serial]
    fn bad_level_falls_back_to_default() {
        clear_env();
        std::env::set_var("FACT_LOG_LEVEL", "loud");

        let (config, err) = LogConfig::from_env_or_default();
        clear_env();

        assert_eq!(config, LogConfig::default());
        assert!(matches!(err, Some(Error::InvalidLevel(level)) if level == "loud"));
    }

    #[test]
    #[serial]
    fn bad_ansi_falls_back_to_default() {
        clear_env();
        std::env::set_var("FACT_LOG_LEVEL", "info");
        std::env::set_var("FACT_LOG_ANSI", "maybe");

        let (config, err) = LogConfig::from_env_or_default();
        clear_env();

        assert_eq!(config, LogConfig::default());
        assert!(matches!(err, Some(Error::Config(_))));
    }

    #[test]
    #[serial]
    fn valid_config_has_no_error() {
        clear_env();
        std::env::set_var("FACT_LOG_LEVEL", "trace");

        let (config, err) = LogConfig::from_env_or_default();
        clear_env();

        assert_eq!(config.level, "trace");
        assert!(err.is_none());
    }

    #[test]
    fn invalid_level() {
        let config = LogConfig {
            level: "loud".into(),
            ansi: None,
        };
        assert!(matches!(
            config.level_filter(),
            Err(Error::InvalidLevel(level)) if level == "loud"
        ));
    }
}
