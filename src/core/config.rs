//! Logger configuration
//!
//! [`LoggerConfig`] is the resolved set of options a [`Logger`] is built
//! from. It can be deserialized from any serde format, assembled in code,
//! or read from `PENLOG_*` environment variables.
//!
//! [`Logger`]: crate::core::Logger

use super::error::{LoggerError, Result};
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_COMPONENT: &str = "PENLOG_COMPONENT";
pub const ENV_LOGLEVEL: &str = "PENLOG_LOGLEVEL";
pub const ENV_OUTPUT: &str = "PENLOG_OUTPUT";
pub const ENV_CAPTURE_LINES: &str = "PENLOG_CAPTURE_LINES";
pub const ENV_CAPTURE_STACKTRACES: &str = "PENLOG_CAPTURE_STACKTRACES";
pub const ENV_COLORS: &str = "PENLOG_COLORS";
pub const ENV_FLUSH: &str = "PENLOG_FLUSH";
pub const ENV_SHOW_IDS: &str = "PENLOG_SHOW_IDS";
pub const ENV_SHOW_TAGS: &str = "PENLOG_SHOW_TAGS";

/// Output mode of a logger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputMode {
    /// Single-line JSON, one record per line
    Json,
    /// Indented multi-line JSON
    JsonPretty,
    /// `<ts> {component} [kind    ]: data` plus continuation lines
    HumanFull,
    /// `<ts>: data`
    #[default]
    HumanTiny,
}

impl OutputMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            OutputMode::Json => "json",
            OutputMode::JsonPretty => "json-pretty",
            OutputMode::HumanFull => "human-full",
            OutputMode::HumanTiny => "human-tiny",
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::HumanFull | OutputMode::HumanTiny)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for OutputMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputMode::Json),
            "json-pretty" => Ok(OutputMode::JsonPretty),
            "human-full" | "hr" | "hr-full" => Ok(OutputMode::HumanFull),
            "human-tiny" | "hr-tiny" | "hr-nano" | "" => Ok(OutputMode::HumanTiny),
            _ => Err(LoggerError::config(
                "output",
                format!(
                    "unknown output mode '{}' (expected json, json-pretty, human-full or human-tiny)",
                    s
                ),
            )),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<OutputMode> for String {
    fn from(mode: OutputMode) -> Self {
        mode.to_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Logical subsystem name stamped on every record
    pub component: String,
    /// Least urgent severity that is still emitted
    pub min_severity: Severity,
    pub output: OutputMode,
    /// Record `file:line` of the logging call
    pub capture_call_site: bool,
    /// Record the full call stack
    pub capture_stacktrace: bool,
    pub show_colors: bool,
    pub flush_every_write: bool,
    pub show_ids: bool,
    pub show_tags: bool,
    pub show_level_prefix: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            component: "root".to_string(),
            min_severity: Severity::Debug,
            output: OutputMode::HumanTiny,
            capture_call_site: false,
            capture_stacktrace: false,
            show_colors: false,
            flush_every_write: false,
            show_ids: false,
            show_tags: false,
            show_level_prefix: false,
        }
    }
}

/// Boolean environment values: `1/t/true/yes/on` are true, anything else false.
fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "t" | "true" | "y" | "yes" | "on"
    )
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `PENLOG_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys keep their
    /// defaults; an unparsable log level keeps the default floor; an
    /// unknown output mode is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(component) = lookup(ENV_COMPONENT).filter(|c| !c.is_empty()) {
            config.component = component;
        }
        if let Some(level) = lookup(ENV_LOGLEVEL) {
            if let Ok(severity) = level.parse::<Severity>() {
                config.min_severity = severity;
            }
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }

        let flag = |key: &str| lookup(key).is_some_and(|v| parse_bool(&v));
        config.capture_call_site = flag(ENV_CAPTURE_LINES);
        config.capture_stacktrace = flag(ENV_CAPTURE_STACKTRACES);
        config.show_colors = flag(ENV_COLORS);
        config.flush_every_write = flag(ENV_FLUSH);
        config.show_ids = flag(ENV_SHOW_IDS);
        config.show_tags = flag(ENV_SHOW_TAGS);

        Ok(config)
    }
}
