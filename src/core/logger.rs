//! Main logger implementation
//!
//! Every logging call runs the same pipeline: build the raw event, check
//! it against the severity floor, enrich it, render it, and write the
//! resulting unit to the sink in one locked write.

use super::{
    config::{LoggerConfig, OutputMode},
    enricher::Enricher,
    error::{LoggerError, Result},
    filter,
    kind::EventKind,
    record::{Event, LogRecord},
    severity::Severity,
};
use crate::render::Renderer;
use crate::sinks::ConsoleSink;
use parking_lot::{Mutex, RwLock};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;

/// Host name of this machine, or `localhost` when it cannot be resolved.
pub fn resolve_host() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "localhost".to_string())
}

/// Immutable snapshot of everything a logging call needs from the config.
struct Settings {
    config: LoggerConfig,
    enricher: Enricher,
    renderer: Renderer,
}

impl Settings {
    fn new(config: LoggerConfig, host: &str) -> Self {
        let enricher = Enricher::new(config.component.clone(), host)
            .with_call_site(config.capture_call_site)
            .with_stacktrace(config.capture_stacktrace);
        let renderer = Renderer::from_config(&config);
        Self {
            config,
            enricher,
            renderer,
        }
    }
}

pub struct Logger {
    host: String,
    settings: RwLock<Arc<Settings>>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Logger with default configuration writing to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self::assemble(config, resolve_host(), Box::new(ConsoleSink::Stderr))
    }

    fn assemble(config: LoggerConfig, host: String, sink: Box<dyn Write + Send>) -> Self {
        let settings = Settings::new(config, &host);
        Self {
            host,
            settings: RwLock::new(Arc::new(settings)),
            sink: Mutex::new(sink),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings.read())
    }

    /// Snapshot of the active configuration.
    pub fn config(&self) -> LoggerConfig {
        self.settings().config.clone()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn min_severity(&self) -> Severity {
        self.settings().config.min_severity
    }

    pub fn output_mode(&self) -> OutputMode {
        self.settings().config.output
    }

    /// Would a record of this severity be written?
    pub fn enabled(&self, severity: Severity) -> bool {
        filter::should_emit(severity, self.min_severity())
    }

    /// Replace the whole configuration at once. Calls already in flight
    /// finish with the snapshot they started with.
    pub fn reconfigure(&self, config: LoggerConfig) {
        let settings = Arc::new(Settings::new(config, &self.host));
        *self.settings.write() = settings;
    }

    /// Log an event attributed to an explicit call site.
    pub fn emit(&self, event: Event, call_site: &Location<'_>) -> Result<()> {
        let settings = self.settings();
        if !filter::should_emit(event.severity(), settings.config.min_severity) {
            return Ok(());
        }

        let record = settings.enricher.enrich(event, call_site);
        let unit = settings.renderer.render(&record)?;
        self.write_unit(&settings, &unit)
    }

    #[track_caller]
    pub fn log(&self, kind: EventKind, severity: Severity, data: impl Into<String>) -> Result<()> {
        self.emit(Event::new(kind, severity, data), Location::caller())
    }

    #[track_caller]
    pub fn log_tagged<I, T>(
        &self,
        kind: EventKind,
        severity: Severity,
        tags: I,
        data: impl Into<String>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.emit(
            Event::new(kind, severity, data).with_tags(tags),
            Location::caller(),
        )
    }

    /// Re-render a compact JSON record produced elsewhere.
    ///
    /// The record is filtered on its raw severity value and written with
    /// this logger's renderer. A missing or unknown severity always passes
    /// and is shown as `info` in human output; JSON output keeps the raw
    /// value. Identity fields are kept as they are.
    pub fn forward(&self, line: &str) -> Result<()> {
        let settings = self.settings();
        let value: serde_json::Value = serde_json::from_str(line)?;
        if !filter::should_emit_value(&value, settings.config.min_severity) {
            return Ok(());
        }

        let (record, raw_severity) = LogRecord::from_foreign(value)?;
        let unit = settings
            .renderer
            .render_foreign(&record, raw_severity.as_ref())?;
        self.write_unit(&settings, &unit)
    }

    /// An `io::Write` adapter: every write becomes one info message.
    #[track_caller]
    pub fn writer(&self) -> LogWriter<'_> {
        LogWriter {
            logger: self,
            call_site: Location::caller(),
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.sink
            .lock()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing sink", "explicit flush", e))
    }

    fn write_unit(&self, settings: &Settings, unit: &str) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(unit.as_bytes()).map_err(|e| {
            LoggerError::io_operation(
                "writing log record",
                format!("{} bytes not written to sink", unit.len()),
                e,
            )
        })?;
        if settings.config.flush_every_write {
            sink.flush()
                .map_err(|e| LoggerError::io_operation("flushing sink", "flush after write", e))?;
        }
        Ok(())
    }
}

/// Generates one plain and one tagged method per convenience mapping.
macro_rules! convenience_methods {
    ($($(#[$meta:meta])* $name:ident, $tagged:ident => $kind:ident, $severity:ident;)+) => {
        impl Logger {
            $(
                $(#[$meta])*
                #[track_caller]
                pub fn $name(&self, data: impl Into<String>) -> Result<()> {
                    self.emit(
                        Event::new(EventKind::$kind, Severity::$severity, data),
                        Location::caller(),
                    )
                }

                $(#[$meta])*
                #[track_caller]
                pub fn $tagged<I, T>(&self, tags: I, data: impl Into<String>) -> Result<()>
                where
                    I: IntoIterator<Item = T>,
                    T: Into<String>,
                {
                    self.emit(
                        Event::new(EventKind::$kind, Severity::$severity, data).with_tags(tags),
                        Location::caller(),
                    )
                }
            )+
        }
    };
}

convenience_methods! {
    /// `preamble` event at notice
    preamble, preamble_tagged => Preamble, Notice;
    /// `read` event at debug
    read, read_tagged => Read, Debug;
    /// `write` event at debug
    write, write_tagged => Write, Debug;
    debug, debug_tagged => Message, Debug;
    info, info_tagged => Message, Info;
    notice, notice_tagged => Message, Notice;
    warning, warning_tagged => Message, Warning;
    error, error_tagged => Message, Error;
    critical, critical_tagged => Message, Critical;
    /// `summary` event at notice
    summary, summary_tagged => Summary, Notice;
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// See [`Logger::writer`].
pub struct LogWriter<'a> {
    logger: &'a Logger,
    call_site: &'static Location<'static>,
}

impl Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let text: &str = &text;
        let data = text.strip_suffix('\n').unwrap_or(text);
        self.logger
            .emit(
                Event::new(EventKind::Message, Severity::Info, data),
                self.call_site,
            )
            .map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.logger
            .flush()
            .map_err(io::Error::other)
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use rust_penlog::prelude::*;
///
/// let logger = Logger::builder()
///     .component("scanner")
///     .min_severity(Severity::Info)
///     .output_mode(OutputMode::Json)
///     .sink(MemorySink::new())
///     .build()
///     .expect("valid configuration");
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    severity_name: Option<String>,
    output_name: Option<String>,
    host: Option<String>,
    sink: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            severity_name: None,
            output_name: None,
            host: None,
            sink: None,
        }
    }

    /// Start from a resolved configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.config.component = component.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.config.min_severity = severity;
        self.severity_name = None;
        self
    }

    /// Select the floor by name or rank; an unknown value makes `build` fail.
    #[must_use = "builder methods return a new value"]
    pub fn min_severity_name(mut self, name: impl Into<String>) -> Self {
        self.severity_name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.config.output = mode;
        self.output_name = None;
        self
    }

    /// Select the output mode by name; an unknown name makes `build` fail.
    #[must_use = "builder methods return a new value"]
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn capture_call_site(mut self, enabled: bool) -> Self {
        self.config.capture_call_site = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn capture_stacktrace(mut self, enabled: bool) -> Self {
        self.config.capture_stacktrace = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_colors(mut self, enabled: bool) -> Self {
        self.config.show_colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_ids(mut self, enabled: bool) -> Self {
        self.config.show_ids = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_tags(mut self, enabled: bool) -> Self {
        self.config.show_tags = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_level_prefix(mut self, enabled: bool) -> Self {
        self.config.show_level_prefix = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flush_every_write(mut self, enabled: bool) -> Self {
        self.config.flush_every_write = enabled;
        self
    }

    /// Override the resolved host name
    #[must_use = "builder methods return a new value"]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Write to `sink` instead of standard error
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let mut config = self.config;
        if let Some(name) = self.severity_name {
            config.min_severity = name.parse()?;
        }
        if let Some(name) = self.output_name {
            config.output = name.parse()?;
        }
        let host = self.host.unwrap_or_else(resolve_host);
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::Stderr));
        Ok(Logger::assemble(config, host, sink))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeverityError;
    use crate::sinks::MemorySink;

    fn memory_logger(min: Severity, output: OutputMode) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .component("tester")
            .host("rig-7")
            .min_severity(min)
            .output_mode(output)
            .sink(sink.clone())
            .build()
            .expect("valid configuration");
        (logger, sink)
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }
    }

    #[derive(Clone, Default)]
    struct CountingSink {
        flushes: Arc<std::sync::atomic::AtomicUsize>,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            Ok(())
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder()
            .sink(MemorySink::new())
            .build()
            .unwrap();
        let config = logger.config();
        assert_eq!(config.component, "root");
        assert_eq!(config.min_severity, Severity::Debug);
        assert_eq!(logger.output_mode(), OutputMode::HumanTiny);
        assert!(!logger.host().is_empty());
    }

    #[test]
    fn test_filtered_call_writes_nothing() {
        let (logger, sink) = memory_logger(Severity::Warning, OutputMode::Json);
        logger.info("not shown").unwrap();
        logger.debug("not shown").unwrap();
        logger.read("not shown").unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_passing_call_writes_one_unit() {
        let (logger, sink) = memory_logger(Severity::Warning, OutputMode::Json);
        logger.error("disk on fire").unwrap();
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["data"], "disk on fire");
        assert_eq!(value["severity"], 3);
        assert_eq!(value["component"], "tester");
        assert_eq!(value["host"], "rig-7");
    }

    #[test]
    fn test_convenience_mappings() {
        let (logger, sink) = memory_logger(Severity::Debug, OutputMode::Json);
        logger.preamble("p").unwrap();
        logger.read("r").unwrap();
        logger.write("w").unwrap();
        logger.debug("d").unwrap();
        logger.info("i").unwrap();
        logger.notice("n").unwrap();
        logger.warning("wa").unwrap();
        logger.error("e").unwrap();
        logger.critical("c").unwrap();
        logger.summary("s").unwrap();

        let pairs: Vec<(String, u64)> = sink
            .lines()
            .iter()
            .map(|line| {
                let v: serde_json::Value = serde_json::from_str(line).unwrap();
                (v["kind"].as_str().unwrap().to_string(), v["severity"].as_u64().unwrap())
            })
            .collect();
        let expected = [
            ("preamble", 5),
            ("read", 7),
            ("write", 7),
            ("message", 7),
            ("message", 6),
            ("message", 5),
            ("message", 4),
            ("message", 3),
            ("message", 2),
            ("summary", 5),
        ];
        assert_eq!(pairs.len(), expected.len());
        for ((kind, severity), (want_kind, want_severity)) in pairs.iter().zip(expected) {
            assert_eq!(kind, want_kind);
            assert_eq!(*severity, want_severity);
        }
    }

    #[test]
    fn test_tagged_methods() {
        let (logger, sink) = memory_logger(Severity::Debug, OutputMode::Json);
        logger.read_tagged(["can", "rx"], "frame").unwrap();
        logger.info_tagged(Vec::<String>::new(), "untagged").unwrap();

        let lines = sink.lines();
        let tagged: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        let untagged: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(tagged["tags"], serde_json::json!(["can", "rx"]));
        assert!(untagged.get("tags").is_none());
    }

    #[test]
    fn test_call_site_points_at_caller() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .output_mode(OutputMode::Json)
            .capture_call_site(true)
            .sink(sink.clone())
            .build()
            .unwrap();

        let expected_line = line!() + 1;
        logger.warning("where am I").unwrap();
        let tagged_line = line!() + 1;
        logger.summary_tagged(["t"], "and now").unwrap();

        let lines = sink.lines();
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        let suffix = format!("logger.rs:{}", expected_line);
        assert!(first["line"].as_str().unwrap().ends_with(&suffix));
        let suffix = format!("logger.rs:{}", tagged_line);
        assert!(second["line"].as_str().unwrap().ends_with(&suffix));
    }

    #[test]
    fn test_invalid_output_name_fails_at_build() {
        let result = Logger::builder()
            .output_name("syslog")
            .sink(MemorySink::new())
            .build();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));

        let logger = Logger::builder()
            .output_name("json-pretty")
            .sink(MemorySink::new())
            .build()
            .unwrap();
        assert_eq!(logger.output_mode(), OutputMode::JsonPretty);
    }

    #[test]
    fn test_write_failure_is_propagated() {
        let logger = Logger::builder().sink(FailingSink).build().unwrap();
        let err = logger.info("lost").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_filtered_call_never_touches_failing_sink() {
        let logger = Logger::builder()
            .min_severity(Severity::Error)
            .sink(FailingSink)
            .build()
            .unwrap();
        assert!(logger.debug("dropped before I/O").is_ok());
    }

    #[test]
    fn test_flush_every_write() {
        let sink = CountingSink::default();
        let flushes = Arc::clone(&sink.flushes);
        let logger = Logger::builder()
            .flush_every_write(true)
            .sink(sink)
            .build()
            .unwrap();
        logger.info("one").unwrap();
        logger.info("two").unwrap();
        assert_eq!(flushes.load(std::sync::atomic::Ordering::Relaxed), 2);
    }

    #[test]
    fn test_reconfigure_swaps_whole_config() {
        let (logger, sink) = memory_logger(Severity::Debug, OutputMode::Json);
        logger.debug("json").unwrap();

        logger.reconfigure(LoggerConfig {
            component: "renamed".to_string(),
            min_severity: Severity::Notice,
            output: OutputMode::HumanFull,
            ..LoggerConfig::default()
        });
        logger.debug("filtered").unwrap();
        logger.notice("human").unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert!(lines[1].contains("{renamed } [message ]: human"));
        assert_eq!(logger.host(), "rig-7");
        assert!(!logger.enabled(Severity::Info));
        assert!(logger.enabled(Severity::Notice));
    }

    #[test]
    fn test_forward_foreign_line() {
        let (logger, sink) = memory_logger(Severity::Info, OutputMode::HumanFull);
        logger
            .forward(r#"{"type":"read","priority":6,"data":"rx","id":"1","component":"can","host":"other","timestamp":"2024-03-02T10:11:12.345000+00:00"}"#)
            .unwrap();
        logger
            .forward(r#"{"type":"read","priority":7,"data":"hidden","id":"2","component":"can","host":"other","timestamp":"2024-03-02T10:11:12.345000+00:00"}"#)
            .unwrap();

        assert_eq!(
            sink.lines(),
            vec!["Mar 02 10:11:12.345 {can     } [read    ]: rx"]
        );
    }

    const UNKNOWN_SEVERITY: &str = r#"{"kind":"message","severity":42,"data":"?","id":"1","component":"c","host":"h","timestamp":"2024-03-02T10:11:12.345000+00:00"}"#;

    #[test]
    fn test_forward_unknown_severity_is_emitted() {
        let (logger, sink) = memory_logger(Severity::Emergency, OutputMode::Json);
        logger.forward(UNKNOWN_SEVERITY).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["severity"], 42);
        assert_eq!(value["data"], "?");
        assert_eq!(value["id"], "1");
    }

    #[test]
    fn test_forward_unknown_severity_renders_as_info() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .min_severity(Severity::Emergency)
            .output_mode(OutputMode::HumanTiny)
            .show_colors(true)
            .show_level_prefix(true)
            .sink(sink.clone())
            .build()
            .unwrap();
        logger.forward(UNKNOWN_SEVERITY).unwrap();
        logger
            .forward(r#"{"type":"read","data":"no prio","id":"2","component":"c","host":"h","timestamp":"2024-03-02T10:11:12.345000+00:00"}"#)
            .unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Mar 02 10:11:12.345: [i] ?",
                "Mar 02 10:11:12.345: [i] no prio",
            ]
        );
    }

    #[test]
    fn test_forward_rejects_malformed_lines() {
        let (logger, sink) = memory_logger(Severity::Debug, OutputMode::Json);
        assert!(matches!(
            logger.forward("not json"),
            Err(LoggerError::JsonError(_))
        ));
        assert!(matches!(
            logger.forward(r#"{"kind":"gossip","severity":6,"data":"x","id":"1","component":"c","host":"h","timestamp":"2024-03-02T10:11:12.345000+00:00"}"#),
            Err(LoggerError::Kind(_))
        ));
        assert!(matches!(
            logger.forward(r#"{"kind":"message","severity":6}"#),
            Err(LoggerError::Decode(_))
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_min_severity_name() {
        let logger = Logger::builder()
            .min_severity_name("warn")
            .sink(MemorySink::new())
            .build()
            .unwrap();
        assert_eq!(logger.min_severity(), Severity::Warning);

        let result = Logger::builder()
            .min_severity_name("chatty")
            .sink(MemorySink::new())
            .build();
        assert!(matches!(
            result,
            Err(LoggerError::Severity(SeverityError::Unknown(_)))
        ));
    }

    #[test]
    fn test_writer_adapter() {
        let (logger, sink) = memory_logger(Severity::Debug, OutputMode::Json);
        {
            let mut writer = logger.writer();
            writer.write_all(b"from a writer\n").unwrap();
            writer.flush().unwrap();
        }
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["data"], "from a writer");
        assert_eq!(value["kind"], "message");
        assert_eq!(value["severity"], 6);
    }
}
