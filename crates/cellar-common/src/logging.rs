//! Host-side diagnostic logger.
//!
//! A `Logger` carries a context label and a mutable minimum level. Every
//! record that passes the threshold is appended to a shared [`LogJournal`]
//! and forwarded to `tracing` under the [`TRACING_TARGET`] target, so the
//! installed subscriber still decides where output goes.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Records kept by the process-wide journal before the oldest are dropped.
pub const GLOBAL_JOURNAL_CAPACITY: usize = 4096;

/// `tracing` target of every `Logger` record. Filter with `cellar=debug`.
pub const TRACING_TARGET: &str = "cellar";

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Lowercase form, usable as a `tracing` filter directive.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Level a `tracing` filter directive enables for [`TRACING_TARGET`],
    /// e.g. `debug` or `cellar=debug,warn`.
    ///
    /// A `cellar`/`cellar::*` target wins over bare levels, as it does in the
    /// filter itself. `None` when the directive says nothing that applies.
    pub fn from_directive(directive: &str) -> Option<Self> {
        let mut targeted: Option<Self> = None;
        let mut bare: Option<Self> = None;
        for part in directive.split(',').map(str::trim) {
            match part.split_once('=') {
                Some((target, level)) => {
                    let target = target.split('[').next().unwrap_or_default().trim();
                    let ours = target == TRACING_TARGET
                        || target.starts_with(&format!("{TRACING_TARGET}::"));
                    if let (true, Ok(level)) = (ours, level.parse::<Self>()) {
                        targeted = Some(targeted.map_or(level, |t| t.min(level)));
                    }
                }
                None if part == TRACING_TARGET => {
                    targeted = Some(Self::Debug);
                }
                None => {
                    if let Ok(level) = part.parse::<Self>() {
                        bare = Some(bare.map_or(level, |b| b.min(level)));
                    }
                }
            }
        }
        targeted.or(bare)
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// One diagnostic entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub context: String,
    pub message: String,
    pub args: Vec<String>,
}

impl LogRecord {
    /// `[timestamp] [LEVEL] [context] message args...`
    pub fn formatted(&self) -> String {
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.context,
            self.message
        );
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Append-only record store shared by a family of loggers.
///
/// Bounded: once `capacity` is reached the oldest record is dropped.
#[derive(Debug, Clone)]
pub struct LogJournal {
    records: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl LogJournal {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// The process-wide journal used by [`Logger::new`].
    pub fn global() -> Self {
        static GLOBAL: OnceLock<LogJournal> = OnceLock::new();
        GLOBAL
            .get_or_init(|| LogJournal::new(GLOBAL_JOURNAL_CAPACITY))
            .clone()
    }

    pub fn push(&self, record: LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            if records.len() == self.capacity {
                records.pop_front();
            }
            records.push_back(record);
        }
    }

    /// Copy of all retained records, oldest first.
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|r| r.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of retained records at exactly `level`.
    pub fn count(&self, level: LogLevel) -> usize {
        self.records
            .lock()
            .map(|r| r.iter().filter(|rec| rec.level == level).count())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogJournal {
    fn default() -> Self {
        Self::new(GLOBAL_JOURNAL_CAPACITY)
    }
}

/// Context-labelled logger with a mutable minimum level.
///
/// Clones share the level; [`Logger::child`] copies it.
#[derive(Debug, Clone)]
pub struct Logger {
    context: Arc<str>,
    threshold: Arc<AtomicU8>,
    journal: LogJournal,
}

impl Logger {
    /// Logger writing to the process-wide journal at `Info`.
    pub fn new(context: impl Into<String>) -> Self {
        Self::with_journal(context, LogLevel::Info, LogJournal::global())
    }

    pub fn with_journal(context: impl Into<String>, level: LogLevel, journal: LogJournal) -> Self {
        Self {
            context: Arc::from(context.into()),
            threshold: Arc::new(AtomicU8::new(level as u8)),
            journal,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    pub fn journal(&self) -> &LogJournal {
        &self.journal
    }

    /// Derive a logger whose context is `parent:additional`.
    pub fn child(&self, additional: &str) -> Logger {
        Self {
            context: Arc::from(format!("{}:{additional}", self.context)),
            threshold: Arc::new(AtomicU8::new(self.level() as u8)),
            journal: self.journal.clone(),
        }
    }

    pub fn debug(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Debug, message, args);
    }

    pub fn info(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Info, message, args);
    }

    pub fn warn(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Warn, message, args);
    }

    pub fn error(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Error, message, args);
    }

    fn log(&self, level: LogLevel, message: &str, args: &[&dyn fmt::Display]) {
        if level < self.level() {
            return;
        }

        let record = LogRecord {
            timestamp: Utc::now(),
            level,
            context: self.context.to_string(),
            message: message.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        };

        let joined = record.args.join(" ");
        let context = &*self.context;
        match level {
            LogLevel::Debug => tracing::debug!(target: TRACING_TARGET, context, "{message} {joined}"),
            LogLevel::Info => tracing::info!(target: TRACING_TARGET, context, "{message} {joined}"),
            LogLevel::Warn => tracing::warn!(target: TRACING_TARGET, context, "{message} {joined}"),
            LogLevel::Error => tracing::error!(target: TRACING_TARGET, context, "{message} {joined}"),
        }

        self.journal.push(record);
    }
}
