//! Process-wide default logger
//!
//! The default logger is created on first use with [`LoggerConfig::default`]
//! and writes to standard error. [`reconfigure`] swaps its configuration as
//! one snapshot; [`set_logger`] replaces the logger itself, for example to
//! redirect output to another sink.

use crate::core::{Event, EventKind, Logger, LoggerConfig, Result, Severity};
use parking_lot::RwLock;
use std::panic::Location;
use std::sync::{Arc, OnceLock};

static DEFAULT_LOGGER: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn cell() -> &'static RwLock<Arc<Logger>> {
    DEFAULT_LOGGER.get_or_init(|| RwLock::new(Arc::new(Logger::new())))
}

/// The current default logger.
pub fn logger() -> Arc<Logger> {
    Arc::clone(&cell().read())
}

/// Replace the default logger.
pub fn set_logger(logger: Logger) {
    *cell().write() = Arc::new(logger);
}

/// Swap the default logger's configuration, keeping its sink and host.
pub fn reconfigure(config: LoggerConfig) {
    logger().reconfigure(config);
}

/// Configure the default logger from `PENLOG_*` environment variables.
pub fn init_from_env() -> Result<()> {
    let config = LoggerConfig::from_env()?;
    reconfigure(config);
    Ok(())
}

macro_rules! global_functions {
    ($($name:ident, $tagged:ident => $kind:ident, $severity:ident;)+) => {
        $(
            #[track_caller]
            pub fn $name(data: impl Into<String>) -> Result<()> {
                let call_site = Location::caller();
                logger().emit(
                    Event::new(EventKind::$kind, Severity::$severity, data),
                    call_site,
                )
            }

            #[track_caller]
            pub fn $tagged<I, T>(tags: I, data: impl Into<String>) -> Result<()>
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let call_site = Location::caller();
                logger().emit(
                    Event::new(EventKind::$kind, Severity::$severity, data).with_tags(tags),
                    call_site,
                )
            }
        )+
    };
}

global_functions! {
    preamble, preamble_tagged => Preamble, Notice;
    read, read_tagged => Read, Debug;
    write, write_tagged => Write, Debug;
    debug, debug_tagged => Message, Debug;
    info, info_tagged => Message, Info;
    notice, notice_tagged => Message, Notice;
    warning, warning_tagged => Message, Warning;
    error, error_tagged => Message, Error;
    critical, critical_tagged => Message, Critical;
    summary, summary_tagged => Summary, Notice;
}
