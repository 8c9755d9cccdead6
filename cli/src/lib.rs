//! # fact
//!
//! Prints the factorial of 5.
//!
//! ```sh
//! $ fact
//! factorial value:
//! 120
//! ```
//!
//! Diagnostics go to stderr and are tuned with `RUST_LOG` or `FACT_LOG_LEVEL`
//! (default `warn`) and `FACT_LOG_ANSI`.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fact_core::factorial;

pub mod config;

use config::{log::DEFAULT_LEVEL, LogConfig};

pub(crate) const LOG_TARGET: &str = "fact-cli";

/// Label printed ahead of the computed value.
pub const LABEL: &str = "factorial value:";
/// Argument the entry sequence evaluates.
pub const INPUT: u32 = 5;

#[derive(Debug, Parser)]
#[command(name = "fact")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

/// Installs the stderr subscriber described by `log_config`.
///
/// An unparsable `level` falls back to [`DEFAULT_LEVEL`].
pub fn setup_logger(log_config: &LogConfig) -> tracing::subscriber::DefaultGuard {
    let level = log_config.level_filter().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let ansi = log_config
        .ansi
        .unwrap_or_else(|| std::io::IsTerminal::is_terminal(&std::io::stderr()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(ansi)
                .pretty()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}

/// Reads `FACT_LOG_*` and installs the logger. Bad settings are reported as a
/// warning and replaced by defaults, never as a failure.
pub fn init_logger() -> tracing::subscriber::DefaultGuard {
    let (log_config, err) = LogConfig::from_env_or_default();
    let guard = setup_logger(&log_config);

    if let Some(err) = err {
        tracing::warn!(target: LOG_TARGET, "ignoring log settings: {err}");
    }
    guard
}

/// Writes the label line, then `INPUT!` in decimal.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{LABEL}")?;

    let value = factorial(INPUT);
    tracing::info!(target: LOG_TARGET, n = INPUT, %value, "computed factorial");

    writeln!(out, "{value}")?;
    Ok(())
}
