//! # Rust Penlog
//!
//! Structured event logging with one JSON schema shared across a fleet of
//! command-line tools and daemons, plus a human-readable rendering of the
//! same records.
//!
//! ## Features
//!
//! - **One schema**: every record carries kind, severity, data, optional
//!   tags, and the id, component, host and timestamp added by the logger
//! - **Severity floor**: records less urgent than the configured minimum
//!   never reach the sink
//! - **Four output modes**: compact JSON, pretty JSON, full and tiny
//!   human-readable text with optional ANSI colors
//! - **Explicit call sites**: `file:line` comes from the public call, not
//!   from stack walking
//!
//! ## Example
//!
//! ```
//! use rust_penlog::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .component("scanner")
//!     .min_severity(Severity::Info)
//!     .output_mode(OutputMode::Json)
//!     .sink(sink.clone())
//!     .build()?;
//!
//! logger.preamble("starting scan")?;
//! logger.debug("suppressed")?;
//! logger.warning_tagged(["net"], "retrying")?;
//!
//! assert_eq!(sink.lines().len(), 2);
//! # Ok::<(), rust_penlog::LoggerError>(())
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod render;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Event, EventKind, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        OutputMode, Result, Severity,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink};
}

pub use crate::core::{
    Enricher, Event, EventKind, KindError, LogRecord, LogWriter, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, OutputMode, Result, Severity, SeverityError,
};
pub use render::{HumanLayout, HumanOptions, HumanRenderer, JsonRenderer, Renderer};
pub use sinks::{ConsoleSink, MemorySink};
