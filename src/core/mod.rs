//! Core logger types

pub mod config;
pub mod enricher;
pub mod error;
pub mod filter;
pub mod kind;
pub mod logger;
pub mod record;
pub mod severity;
pub mod timestamp;

pub use config::{LoggerConfig, OutputMode};
pub use enricher::Enricher;
pub use error::{LoggerError, Result};
pub use filter::{should_emit, should_emit_parsed, should_emit_value};
pub use kind::{EventKind, KindError};
pub use logger::{LogWriter, Logger, LoggerBuilder};
pub use record::{Event, LogRecord};
pub use severity::{Severity, SeverityError};
