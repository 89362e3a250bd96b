//! Machine renderer
//!
//! Compact mode writes one JSON object per line; JSON string escaping
//! guarantees no raw newline inside a record. Pretty mode indents the same
//! object over several lines.

use crate::core::{LogRecord, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Render one record without a trailing newline.
    pub fn render(&self, record: &LogRecord) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(json)
    }

    /// Render a record whose wire severity was not one of the known ranks.
    /// `raw` replaces the `severity` field verbatim; `Null` drops it.
    pub fn render_with_raw_severity(
        &self,
        record: &LogRecord,
        raw: &serde_json::Value,
    ) -> Result<String> {
        let mut value = serde_json::to_value(record)?;
        if let Some(obj) = value.as_object_mut() {
            if raw.is_null() {
                obj.remove("severity");
            } else {
                obj.insert("severity".to_string(), raw.clone());
            }
        }
        let json = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Enricher, Event, EventKind, Severity};
    use std::panic::Location;

    fn record(data: &str, tags: &[&str]) -> LogRecord {
        let event =
            Event::new(EventKind::Summary, Severity::Notice, data).with_tags(tags.iter().copied());
        Enricher::new("scanner", "rig-7")
            .with_call_site(true)
            .enrich(event, Location::caller())
    }

    #[test]
    fn test_compact_is_single_line() {
        let out = JsonRenderer::compact()
            .render(&record("line one\nline two", &[]))
            .unwrap();
        assert!(!out.contains('\n'));
        assert!(out.contains(r#""data":"line one\nline two""#));
    }

    #[test]
    fn test_field_encoding() {
        let out = JsonRenderer::compact().render(&record("done", &["a", "b"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["kind"], "summary");
        assert_eq!(value["severity"], 5);
        assert_eq!(value["data"], "done");
        assert_eq!(value["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(value["component"], "scanner");
        assert_eq!(value["host"], "rig-7");
        assert!(value["id"].is_string());
        assert!(value["timestamp"].is_string());
        assert!(value["line"].as_str().unwrap().contains("json.rs"));
        assert!(value.get("stacktrace").is_none());
    }

    #[test]
    fn test_empty_tags_are_omitted() {
        let out = JsonRenderer::compact().render(&record("done", &[])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn test_compact_roundtrip() {
        let original = record("payload with \"quotes\" and \t tabs", &["x"]);
        let out = JsonRenderer::compact().render(&original).unwrap();
        let decoded = LogRecord::from_json(&out).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_raw_severity_is_reproduced() {
        let out = JsonRenderer::compact()
            .render_with_raw_severity(&record("odd", &[]), &serde_json::json!(42))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["severity"], 42);
        assert_eq!(value["data"], "odd");

        let out = JsonRenderer::compact()
            .render_with_raw_severity(&record("odd", &[]), &serde_json::Value::Null)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("severity").is_none());
    }

    #[test]
    fn test_pretty_is_indented() {
        let original = record("done", &[]);
        let out = JsonRenderer::pretty().render(&original).unwrap();
        assert!(out.starts_with("{\n  \""));
        assert!(out.lines().count() > 1);
        assert_eq!(LogRecord::from_json(&out).unwrap(), original);
    }
}
