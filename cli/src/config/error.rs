use thiserror::Error;

/// Errors from reading diagnostics settings.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid log level \"{0}\"")]
    InvalidLevel(String),
}
