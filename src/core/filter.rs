//! Priority filter
//!
//! A record passes when its severity is at least as urgent as the floor.
//! Severities that cannot be determined always pass.

use super::severity::{Severity, SeverityError};

#[inline]
pub fn should_emit(severity: Severity, floor: Severity) -> bool {
    severity <= floor
}

/// Filter on a parse result; unrecognized severities fail open.
pub fn should_emit_parsed(severity: Result<Severity, SeverityError>, floor: Severity) -> bool {
    match severity {
        Ok(severity) => should_emit(severity, floor),
        Err(_) => true,
    }
}

/// Filter an undecoded JSON record on its `severity` (or legacy
/// `priority`) field. A missing or malformed value passes.
pub fn should_emit_value(record: &serde_json::Value, floor: Severity) -> bool {
    let raw = record.get("severity").or_else(|| record.get("priority"));
    match raw {
        Some(value) => should_emit_parsed(Severity::from_value(value), floor),
        None => true,
    }
}
