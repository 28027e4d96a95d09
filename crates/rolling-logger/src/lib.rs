//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a fixed-size
//! circular buffer and forwards every line to a pluggable sink.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Where formatted lines go besides the buffer
pub trait LogSink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// Sink that only buffers
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _level: Level, _line: &str) {}
}

/// One buffered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub line: String,
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogLine>>,
    sink: Box<dyn LogSink>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize, sink: Box<dyn LogSink>) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// `[HH:MM:SS.mmm LEVEL app target] message`
    pub fn format(&self, record: &Record) -> String {
        format!(
            "[{} {:<5} {} {}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    fn push(&self, level: Level, line: String) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(LogLine { level, line });
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        self.sink.write(record.level(), &line);
        self.push(record.level(), line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if any logger is already set.
pub fn init_logger(
    app_name: &str,
    level: LevelFilter,
    capacity: usize,
    sink: Box<dyn LogSink>,
) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(app_name, level, capacity, sink)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = LOGGER.set(logger);
    Ok(logger)
}

/// The installed logger, if `init_logger` succeeded
pub fn logger() -> Option<&'static RollingLogger> {
    LOGGER.get().copied()
}

/// Buffered lines of the installed logger
pub fn recent_lines() -> Vec<LogLine> {
    logger().map(RollingLogger::recent).unwrap_or_default()
}

pub fn info(message: &str) {
    log::info!("{}", message);
}

pub fn error(message: &str) {
    log::error!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Default, Clone)]
    struct Captured(Arc<Mutex<Vec<String>>>);

    impl LogSink for Captured {
        fn write(&self, _level: Level, line: &str) {
            self.0.lock().unwrap().push(line.to_string());
        }
    }

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("course_admin")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_keeps_latest_lines() {
        let logger = RollingLogger::new("test", LevelFilter::Trace, 3, Box::new(NullSink));
        for n in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", n));
        }
        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].line.ends_with("line 2"));
        assert!(recent[2].line.ends_with("line 4"));
    }

    #[test]
    fn test_level_filter_applies_to_sink_and_buffer() {
        let captured = Captured::default();
        let logger = RollingLogger::new("CourseAdmin", LevelFilter::Warn, 10, Box::new(captured.clone()));
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Error, "boom");

        assert_eq!(logger.recent().len(), 1);
        let lines = captured.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR CourseAdmin course_admin] boom"));
        assert_eq!(logger.app_name(), "CourseAdmin");
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new("test", LevelFilter::Info, 2, Box::new(NullSink));
        emit(&logger, Level::Info, "x");
        logger.clear();
        assert!(logger.recent().is_empty());
    }
}
