//! Human-readable renderer
//!
//! Two layouts:
//!
//! - tiny: `Mar 02 10:11:12.345: data`
//! - full: `Mar 02 10:11:12.345 {scanner } [message ]: data`, followed by
//!   optional `  => ` continuation lines for id, line, tags and stacktrace,
//!   in that order.
//!
//! The tiny layout never prints continuation lines, whatever the
//! individual `show_*` flags say.

use super::style::Style;
use crate::core::{timestamp, LogRecord};

const COMPONENT_WIDTH: usize = 8;
const KIND_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HumanLayout {
    Full,
    #[default]
    Tiny,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanOptions {
    pub layout: HumanLayout,
    pub show_colors: bool,
    pub show_ids: bool,
    pub show_lines: bool,
    pub show_stacktraces: bool,
    pub show_tags: bool,
    pub show_level_prefix: bool,
}

impl HumanOptions {
    pub fn full() -> Self {
        Self {
            layout: HumanLayout::Full,
            ..Self::default()
        }
    }

    pub fn tiny() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    #[must_use]
    pub fn with_ids(mut self, enabled: bool) -> Self {
        self.show_ids = enabled;
        self
    }

    #[must_use]
    pub fn with_lines(mut self, enabled: bool) -> Self {
        self.show_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_stacktraces(mut self, enabled: bool) -> Self {
        self.show_stacktraces = enabled;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, enabled: bool) -> Self {
        self.show_tags = enabled;
        self
    }

    #[must_use]
    pub fn with_level_prefix(mut self, enabled: bool) -> Self {
        self.show_level_prefix = enabled;
        self
    }
}

/// Left-align `s` in a field of `width` chars, cutting it if longer.
fn pad_or_truncate(s: &str, width: usize) -> String {
    let truncated: String = s.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

#[derive(Debug, Clone, Default)]
pub struct HumanRenderer {
    options: HumanOptions,
}

impl HumanRenderer {
    pub fn new(options: HumanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HumanOptions {
        &self.options
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.options.show_colors {
            style.paint(text)
        } else {
            text.to_string()
        }
    }

    fn payload(&self, record: &LogRecord) -> String {
        let data = self.paint(Style::for_severity(record.severity()), record.data());
        if self.options.show_level_prefix {
            format!("{} {}", record.severity().marker(), data)
        } else {
            data
        }
    }

    /// Render one record without a trailing newline.
    pub fn render(&self, record: &LogRecord) -> String {
        let ts = timestamp::format_human(record.timestamp());
        let payload = self.payload(record);

        if self.options.layout == HumanLayout::Tiny {
            return format!("{}: {}", ts, payload);
        }

        let mut out = format!(
            "{} {{{}}} [{}]: {}",
            ts,
            pad_or_truncate(record.component(), COMPONENT_WIDTH),
            pad_or_truncate(record.kind().to_str(), KIND_WIDTH),
            payload
        );

        if self.options.show_ids {
            out.push_str("\n  => id  : ");
            out.push_str(&self.paint(Style::YELLOW, record.id()));
        }
        if self.options.show_lines {
            if let Some(line) = record.line() {
                out.push_str("\n  => line: ");
                out.push_str(&self.paint(Style::BLUE, line));
            }
        }
        if self.options.show_tags {
            if let Some(tags) = record.tags() {
                out.push_str("\n  => tags: ");
                out.push_str(&tags.join(" "));
            }
        }
        if self.options.show_stacktraces {
            if let Some(stacktrace) = record.stacktrace() {
                out.push_str("\n  => stacktrace:");
                for line in stacktrace.lines() {
                    out.push_str("\n  | ");
                    out.push_str(&self.paint(Style::GRAY, line));
                }
            }
        }

        out
    }
}
