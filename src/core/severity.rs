//! Severity definitions
//!
//! The eight syslog priorities (RFC 5424, section 6.2.1). A lower rank is
//! more urgent; `Emergency` compares less than `Debug`.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    #[default]
    Debug = 7,
}

/// Recognized failure when coercing loosely typed input into a [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeverityError {
    #[error("unknown severity '{0}'")]
    Unknown(String),

    #[error("severity rank {0} is outside 0..=7")]
    OutOfRange(i64),

    #[error("severity must be a string or an integer, got {0}")]
    InvalidType(String),
}

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: i64) -> Result<Self, SeverityError> {
        usize::try_from(rank)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(SeverityError::OutOfRange(rank))
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// One-letter marker used by the human renderer's level prefix.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Emergency => "[E]",
            Severity::Alert => "[A]",
            Severity::Critical => "[C]",
            Severity::Error => "[E]",
            Severity::Warning => "[w]",
            Severity::Notice => "[n]",
            Severity::Info => "[i]",
            Severity::Debug => "[d]",
        }
    }

    /// Coerce an untyped JSON value (rank or name) into a severity.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, SeverityError> {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(rank) => Self::from_rank(rank),
                None => Err(SeverityError::Unknown(n.to_string())),
            },
            serde_json::Value::String(s) => s.parse(),
            other => Err(SeverityError::InvalidType(other.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<i64>() {
            return Self::from_rank(rank);
        }
        match trimmed.to_lowercase().as_str() {
            "emergency" | "emerg" => Ok(Severity::Emergency),
            "alert" => Ok(Severity::Alert),
            "critical" | "crit" => Ok(Severity::Critical),
            "error" | "err" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(SeverityError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<i64> for Severity {
    type Error = SeverityError;

    fn try_from(rank: i64) -> Result<Self, SeverityError> {
        Self::from_rank(rank)
    }
}

// On the wire a severity is its integer rank.
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity rank 0..=7 or a severity name")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
                Severity::from_rank(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
                let rank = i64::try_from(v).unwrap_or(i64::MAX);
                Severity::from_rank(rank).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}
