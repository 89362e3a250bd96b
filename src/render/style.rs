//! ANSI styles for human output
//!
//! Styles are applied only when the renderer was asked for colors, so
//! output is identical whether or not the sink is a terminal.

use crate::core::Severity;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style(&'static str);

impl Style {
    pub const PLAIN: Style = Style("");
    pub const BOLD: Style = Style("\x1b[1m");
    pub const BOLD_RED: Style = Style("\x1b[1;31m");
    pub const BOLD_YELLOW: Style = Style("\x1b[1;33m");
    pub const YELLOW: Style = Style("\x1b[33m");
    pub const BLUE: Style = Style("\x1b[34m");
    pub const GRAY: Style = Style("\x1b[0;38;5;245m");

    /// Style for a record's data at the given severity.
    pub fn for_severity(severity: Severity) -> Style {
        match severity {
            Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
                Style::BOLD_RED
            }
            Severity::Warning => Style::BOLD_YELLOW,
            Severity::Notice => Style::BOLD,
            Severity::Info => Style::PLAIN,
            Severity::Debug => Style::GRAY,
        }
    }

    pub fn paint(&self, text: &str) -> String {
        if self.0.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.0, text, RESET)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(Style::BOLD_RED.paint("boom"), "\x1b[1;31mboom\x1b[0m");
        assert_eq!(Style::GRAY.paint("meh"), "\x1b[0;38;5;245mmeh\x1b[0m");
        assert_eq!(Style::PLAIN.paint("plain"), "plain");
    }

    #[test]
    fn test_severity_styles() {
        assert_eq!(Style::for_severity(Severity::Emergency), Style::BOLD_RED);
        assert_eq!(Style::for_severity(Severity::Error), Style::BOLD_RED);
        assert_eq!(Style::for_severity(Severity::Warning), Style::BOLD_YELLOW);
        assert_eq!(Style::for_severity(Severity::Notice), Style::BOLD);
        assert_eq!(Style::for_severity(Severity::Info), Style::PLAIN);
        assert_eq!(Style::for_severity(Severity::Debug), Style::GRAY);
    }
}
