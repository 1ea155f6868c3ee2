use std::fmt::{self, Display, Formatter};

use parking_lot::Mutex;
use tracing::{error, info, warn};

/// Sink for test diagnostics
pub trait Logger {
    fn log(&self, args: fmt::Arguments<'_>);

    /// Something looks wrong but the test can go on
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(args)
    }
}

/// Stops the current test
pub trait FailureReporter {
    fn fatal(&self, args: fmt::Arguments<'_>) -> !;
}

/// Default context, writes through `tracing`.
///
/// `fatal` panics, which fails the running `#[test]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingContext;

impl Logger for TracingContext {
    fn log(&self, args: fmt::Arguments<'_>) {
        info!("{}", args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        warn!("{}", args);
    }
}

impl FailureReporter for TracingContext {
    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        error!("{}", args);
        panic!("{}", args)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Fatal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

impl Display for LogLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.level, self.message)
    }
}

/// Context that keeps every line it receives so tests can assert on them.
/// `fatal` records the message before panicking.
#[derive(Debug, Default)]
pub struct RecordingContext {
    lines: Mutex<Vec<LogLine>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .map(|line| line.message.clone())
            .collect()
    }

    pub fn fatal_message(&self) -> Option<String> {
        self.lines
            .lock()
            .iter()
            .find(|line| line.level == LogLevel::Fatal)
            .map(|line| line.message.clone())
    }

    fn record(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.lines.lock().push(LogLine {
            level,
            message: args.to_string(),
        });
    }
}

impl Logger for RecordingContext {
    fn log(&self, args: fmt::Arguments<'_>) {
        self.record(LogLevel::Info, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.record(LogLevel::Warn, args);
    }
}

impl FailureReporter for RecordingContext {
    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.record(LogLevel::Fatal, args);
        panic!("{}", args)
    }
}
