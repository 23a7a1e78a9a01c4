use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Embedding applications that already install a logger should skip this
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("miru_airing", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        crate::log_info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a schedule that could not be turned into a slot
    pub fn unknown_schedule(day: Option<&str>, time: Option<&str>) {
        debug!(
            "Schedule: unknown broadcast slot (day: {:?}, time: {:?})",
            day, time
        );
    }

    /// Log metadata source calls
    pub fn metadata_fetch(source: &str, mal_id: u32, outcome: &str) {
        debug!("Metadata: {} #{} {}", source, mal_id, outcome);
    }

    /// Log ticker lifecycle transitions
    pub fn ticker_lifecycle(event: &str, interval_secs: u64) {
        info!("Ticker: {} (interval {}s)", event, interval_secs);
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        crate::log_error!("{}: {}", context, error);
    }
}
