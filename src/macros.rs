//! Logging macros with `format!`-style arguments.
//!
//! Each macro forwards to the matching [`Logger`](crate::Logger) method, so
//! the recorded call site is the macro invocation. Tags go first, after a
//! `tags:` marker.
//!
//! # Examples
//!
//! ```
//! use rust_penlog::prelude::*;
//! use rust_penlog::{info, read_event};
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port).unwrap();
//! read_event!(logger, tags: ["uart"], "{} bytes", 16).unwrap();
//! ```

/// Log with an explicit kind and severity.
///
/// ```
/// # use rust_penlog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
/// use rust_penlog::log;
/// log!(logger, EventKind::Summary, Severity::Info, "{} of {} passed", 9, 10).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $kind:expr, $severity:expr, tags: $tags:expr, $($arg:tt)+) => {
        $logger.log_tagged($kind, $severity, $tags, format!($($arg)+))
    };
    ($logger:expr, $kind:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($kind, $severity, format!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __convenience {
    ($method:ident, $tagged:ident, $logger:expr, tags: $tags:expr, $($arg:tt)+) => {
        $logger.$tagged($tags, format!($($arg)+))
    };
    ($method:ident, $tagged:ident, $logger:expr, $($arg:tt)+) => {
        $logger.$method(format!($($arg)+))
    };
}

/// Log a `preamble` event at notice.
#[macro_export]
macro_rules! preamble {
    ($($arg:tt)+) => { $crate::__convenience!(preamble, preamble_tagged, $($arg)+) };
}

/// Log a `read` event at debug.
#[macro_export]
macro_rules! read_event {
    ($($arg:tt)+) => { $crate::__convenience!(read, read_tagged, $($arg)+) };
}

/// Log a `write` event at debug.
#[macro_export]
macro_rules! write_event {
    ($($arg:tt)+) => { $crate::__convenience!(write, write_tagged, $($arg)+) };
}

/// Log a debug message.
///
/// ```
/// # use rust_penlog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
/// use rust_penlog::debug;
/// debug!(logger, "counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__convenience!(debug, debug_tagged, $($arg)+) };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__convenience!(info, info_tagged, $($arg)+) };
}

/// Log a notice message.
#[macro_export]
macro_rules! notice {
    ($($arg:tt)+) => { $crate::__convenience!(notice, notice_tagged, $($arg)+) };
}

/// Log a warning message.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::__convenience!(warning, warning_tagged, $($arg)+) };
}

/// Log an error message.
///
/// ```
/// # use rust_penlog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
/// use rust_penlog::error;
/// error!(logger, tags: ["db"], "query failed: {}", "timeout").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__convenience!(error, error_tagged, $($arg)+) };
}

/// Log a critical message.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => { $crate::__convenience!(critical, critical_tagged, $($arg)+) };
}

/// Log a `summary` event at notice.
#[macro_export]
macro_rules! summary {
    ($($arg:tt)+) => { $crate::__convenience!(summary, summary_tagged, $($arg)+) };
}
