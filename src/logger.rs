use std::collections::VecDeque;
use strum_macros::Display;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("\x1b[32m[INFO] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        println!("\x1b[35m[WARN] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        println!("\x1b[31m[ERROR][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var("LOG_GUIDANCE_EVENTS").is_ok() {
            println!("\x1b[36m[EVENT][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}

/// Severity of a diagnostic emitted by a simulation module.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    #[strum(to_string = "DEBUG")]
    Debug,
    #[strum(to_string = "INFO")]
    Info,
    #[strum(to_string = "WARNING")]
    Warning,
    #[strum(to_string = "ERROR")]
    Error,
}

/// A single diagnostic as recorded by a [`ModuleLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: LogLevel,
    message: String,
}

impl LogRecord {
    pub fn level(&self) -> LogLevel { self.level }
    pub fn message(&self) -> &str { &self.message }
}

/// Per-instance diagnostic sink.
///
/// Every accepted record is echoed to the console through the crate's logging macros
/// and kept in a bounded history so the host (or a test) can inspect what a module reported.
/// Records below `min_level` are dropped entirely.
#[derive(Debug, Clone)]
pub struct ModuleLogger {
    tag: String,
    min_level: LogLevel,
    history: VecDeque<LogRecord>,
}

impl ModuleLogger {
    /// Maximum number of records retained before the oldest are discarded
    const HISTORY_CAP: usize = 256;

    pub fn new(tag: &str, min_level: LogLevel) -> Self {
        Self {
            tag: tag.to_string(),
            min_level,
            history: VecDeque::with_capacity(Self::HISTORY_CAP),
        }
    }

    pub fn min_level(&self) -> LogLevel { self.min_level }

    pub fn set_min_level(&mut self, level: LogLevel) { self.min_level = level; }

    /// Emits a diagnostic, returning `true` if it passed the level filter.
    pub fn emit(&mut self, level: LogLevel, message: impl Into<String>) -> bool {
        if level < self.min_level {
            return false;
        }
        let message = message.into();
        match level {
            LogLevel::Debug => crate::event!("{}: {message}", self.tag),
            LogLevel::Info => crate::info!("{}: {message}", self.tag),
            LogLevel::Warning => crate::warn!("{}: {message}", self.tag),
            LogLevel::Error => crate::error!("{}: {message}", self.tag),
        }
        if self.history.len() == Self::HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(LogRecord { level, message });
        true
    }

    pub fn records(&self) -> impl Iterator<Item = &LogRecord> { self.history.iter() }

    pub fn last(&self) -> Option<&LogRecord> { self.history.back() }

    pub fn count(&self, level: LogLevel) -> usize {
        self.history.iter().filter(|rec| rec.level == level).count()
    }

    pub fn clear(&mut self) { self.history.clear(); }
}
