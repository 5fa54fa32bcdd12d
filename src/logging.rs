//! Logger bootstrap.
//!
//! The crate logs through the `log` facade only. Hosts that want output call
//! [`init_logging`] once; libraries embedding this crate may install their
//! own logger instead.
//!
//! Events are `key=value` lines starting with `event=`.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::config::PortfolioConfig;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Unsupported log level `{0}`")]
    UnsupportedLevel(String),
    #[error("Logging already initialized with level `{active}`; refusing to switch to `{requested}`")]
    LevelMismatch {
        active: &'static str,
        requested: &'static str,
    },
    #[error("Failed to start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
}

/// Start the stderr logger at `level`.
///
/// Repeated calls with the same level are no-ops. A different level is
/// rejected once a logger is running.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let logger = Logger::try_with_str(level)?
            .log_to_stderr()
            .format(flexi_logger::detailed_format)
            .start()?;

        info!(
            "event=logging_init status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(LoggingError::LevelMismatch {
            active: state.level,
            requested: level,
        });
    }
    Ok(())
}

/// [`init_logging`] at the configured `log_level`.
pub fn init_from_config(config: &PortfolioConfig) -> Result<(), LoggingError> {
    init_logging(&config.log_level)
}

/// Active level, or `None` before [`init_logging`] succeeded.
pub fn logging_level() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    let lowered = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .copied()
        .find(|l| *l == lowered)
        .ok_or_else(|| LoggingError::UnsupportedLevel(level.to_string()))
}
