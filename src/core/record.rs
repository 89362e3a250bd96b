//! Event and record structures
//!
//! An [`Event`] is what a caller hands to the logger: kind, severity, data
//! and optional tags. Enrichment turns it into a [`LogRecord`], which adds
//! the identity fields a caller can never set directly.

use super::error::LoggerError;
use super::kind::EventKind;
use super::severity::Severity;
use super::timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Drop an empty tag list so that `tags` is either absent or non-empty.
fn normalize_tags(tags: Vec<String>) -> Option<Vec<String>> {
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

fn deserialize_tags<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    let tags = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(tags.and_then(normalize_tags))
}

/// A raw event before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    severity: Severity,
    data: String,
    tags: Option<Vec<String>>,
}

impl Event {
    /// Any string is accepted as data, including the empty string.
    pub fn new(kind: EventKind, severity: Severity, data: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            data: data.into(),
            tags: None,
        }
    }

    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = normalize_tags(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

/// A fully enriched log record, ready to render.
///
/// Field names are the wire schema: compact JSON output uses them verbatim.
/// Decoding also accepts the legacy names `type` and `priority`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(alias = "type")]
    kind: EventKind,
    #[serde(alias = "priority")]
    severity: Severity,
    data: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_tags"
    )]
    tags: Option<Vec<String>>,
    id: String,
    component: String,
    host: String,
    #[serde(with = "timestamp::wire")]
    timestamp: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stacktrace: Option<String>,
}

/// Identity and context attached during enrichment.
#[derive(Debug, Clone)]
pub(crate) struct Identity {
    pub id: String,
    pub component: String,
    pub host: String,
    pub timestamp: DateTime<FixedOffset>,
    pub line: Option<String>,
    pub stacktrace: Option<String>,
}

impl LogRecord {
    pub(crate) fn from_parts(event: Event, identity: Identity) -> Self {
        Self {
            kind: event.kind,
            severity: event.severity,
            data: event.data,
            tags: event.tags,
            id: identity.id,
            component: identity.component,
            host: identity.host,
            timestamp: identity.timestamp,
            line: identity.line,
            stacktrace: identity.stacktrace,
        }
    }

    /// Decode one compact JSON record.
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Decode a record written by another producer.
    ///
    /// A missing or unrecognized severity does not fail the decode: the
    /// record is read as `info`, and the raw value is handed back (`Null`
    /// when absent) so that machine output can reproduce it. An unknown
    /// kind name is a [`KindError`](super::kind::KindError).
    pub fn from_foreign(
        mut value: serde_json::Value,
    ) -> Result<(Self, Option<serde_json::Value>), LoggerError> {
        if let Some(serde_json::Value::String(kind)) =
            value.get("kind").or_else(|| value.get("type"))
        {
            kind.parse::<EventKind>()?;
        }

        let key = if value.get("severity").is_some() {
            "severity"
        } else {
            "priority"
        };
        let known = value.get(key).map(|raw| Severity::from_value(raw).is_ok());
        let raw_severity = match known {
            Some(true) => None,
            Some(false) => Some(std::mem::replace(
                &mut value[key],
                serde_json::Value::from(Severity::Info.rank()),
            )),
            None => {
                if let Some(obj) = value.as_object_mut() {
                    obj.insert(key.to_string(), Severity::Info.rank().into());
                }
                Some(serde_json::Value::Null)
            }
        };

        let record = Self::from_value(value).map_err(|e| LoggerError::decode(e.to_string()))?;
        Ok((record, raw_severity))
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    /// Call-site location as `file:line`, when captured.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    pub fn stacktrace(&self) -> Option<&str> {
        self.stacktrace.as_deref()
    }
}
