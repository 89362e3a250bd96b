//! Event kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic category of an event, orthogonal to its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Read,
    Write,
    Preamble,
    Message,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event kind '{0}'")]
pub struct KindError(pub String);

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Read,
        EventKind::Write,
        EventKind::Preamble,
        EventKind::Message,
        EventKind::Summary,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            EventKind::Read => "read",
            EventKind::Write => "write",
            EventKind::Preamble => "preamble",
            EventKind::Message => "message",
            EventKind::Summary => "summary",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for EventKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "read" => Ok(EventKind::Read),
            "write" => Ok(EventKind::Write),
            "preamble" => Ok(EventKind::Preamble),
            "message" => Ok(EventKind::Message),
            "summary" => Ok(EventKind::Summary),
            _ => Err(KindError(s.to_string())),
        }
    }
}
