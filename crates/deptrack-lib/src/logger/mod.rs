//! Structured logging setup
//!
//! Thin wrapper over tracing-subscriber: an EnvFilter honoring `RUST_LOG`
//! with a verbosity-derived fallback, a compact fmt layer on the configured
//! stream, and a single-initialization guard.

use crate::primitives::{LogOutput, LoggerConfig, LoggerError};
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Default filter directive for the given level name. The library's tracing
/// targets live under the `deptrack_lib` crate path; the trailing bare level
/// applies to everything else.
fn default_filter(level: &str) -> String {
    format!("deptrack_lib={level},{level}")
}

/// Logger implementation backed by tracing
#[derive(Debug)]
pub struct Logger {
    _guard: (),
}

impl Logger {
    /// Initialize the global logger from the CLI-derived configuration
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // RUST_LOG wins; otherwise derive the filter from the -v count
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(config.level.as_filter_str())));

        let fmt_layer = match config.output {
            LogOutput::Stderr => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .compact()
                .boxed(),
            LogOutput::Stdout => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal())
                .compact()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        GLOBAL_LOGGER
            .set(Logger { _guard: () })
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            output = ?config.output,
            "logger initialized"
        );

        GLOBAL_LOGGER.get().ok_or(LoggerError::AlreadyInitialized)
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if the logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
