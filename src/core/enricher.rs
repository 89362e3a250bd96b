//! Record enrichment
//!
//! Attaches identity and context to a raw [`Event`]. The call site is
//! passed in explicitly by the public entry point that received the call,
//! so no stack walking or frame counting happens here.

use super::record::{Event, Identity, LogRecord};
use super::timestamp;
use chrono::{DateTime, FixedOffset};
use std::backtrace::Backtrace;
use std::panic::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enricher {
    component: String,
    host: String,
    capture_call_site: bool,
    capture_stacktrace: bool,
}

impl Enricher {
    pub fn new(component: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            host: host.into(),
            capture_call_site: false,
            capture_stacktrace: false,
        }
    }

    #[must_use]
    pub fn with_call_site(mut self, enabled: bool) -> Self {
        self.capture_call_site = enabled;
        self
    }

    #[must_use]
    pub fn with_stacktrace(mut self, enabled: bool) -> Self {
        self.capture_stacktrace = enabled;
        self
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn enrich(&self, event: Event, call_site: &Location<'_>) -> LogRecord {
        self.enrich_at(event, call_site, timestamp::now())
    }

    /// Enrich with a caller-chosen timestamp (truncated to microseconds).
    pub fn enrich_at(
        &self,
        event: Event,
        call_site: &Location<'_>,
        timestamp: DateTime<FixedOffset>,
    ) -> LogRecord {
        let line = self
            .capture_call_site
            .then(|| format!("{}:{}", call_site.file(), call_site.line()));
        let stacktrace = self
            .capture_stacktrace
            .then(|| Backtrace::force_capture().to_string());

        LogRecord::from_parts(
            event,
            Identity {
                id: uuid::Uuid::new_v4().to_string(),
                component: self.component.clone(),
                host: self.host.clone(),
                timestamp: timestamp::truncate_to_micros(timestamp),
                line,
                stacktrace,
            },
        )
    }
}
