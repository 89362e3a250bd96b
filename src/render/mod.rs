//! Renderers turning a finished [`LogRecord`] into one output unit

pub mod human;
pub mod json;
pub mod style;

pub use human::{HumanLayout, HumanOptions, HumanRenderer};
pub use json::JsonRenderer;
pub use style::Style;

use crate::core::{LogRecord, LoggerConfig, OutputMode, Result};

/// The renderer selected by a logger's output mode.
#[derive(Debug, Clone)]
pub enum Renderer {
    Json(JsonRenderer),
    Human(HumanRenderer),
}

impl Renderer {
    pub fn from_config(config: &LoggerConfig) -> Self {
        let layout = match config.output {
            OutputMode::Json => return Renderer::Json(JsonRenderer::compact()),
            OutputMode::JsonPretty => return Renderer::Json(JsonRenderer::pretty()),
            OutputMode::HumanFull => HumanLayout::Full,
            OutputMode::HumanTiny => HumanLayout::Tiny,
        };
        Renderer::Human(HumanRenderer::new(HumanOptions {
            layout,
            show_colors: config.show_colors,
            show_ids: config.show_ids,
            show_lines: config.capture_call_site,
            show_stacktraces: config.capture_stacktrace,
            show_tags: config.show_tags,
            show_level_prefix: config.show_level_prefix,
        }))
    }

    /// Render one output unit, terminated by a newline.
    pub fn render(&self, record: &LogRecord) -> Result<String> {
        let mut unit = match self {
            Renderer::Json(json) => json.render(record)?,
            Renderer::Human(human) => human.render(record),
        };
        unit.push('\n');
        Ok(unit)
    }

    /// Render a forwarded record. With an unrecognized wire severity the
    /// machine renderer reproduces the raw value; human output shows the
    /// record as `info`.
    pub fn render_foreign(
        &self,
        record: &LogRecord,
        raw_severity: Option<&serde_json::Value>,
    ) -> Result<String> {
        match (self, raw_severity) {
            (Renderer::Json(json), Some(raw)) => {
                let mut unit = json.render_with_raw_severity(record, raw)?;
                unit.push('\n');
                Ok(unit)
            }
            _ => self.render(record),
        }
    }
}
