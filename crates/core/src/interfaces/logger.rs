//! Logger collaborator injected by the host

use std::error::Error as StdError;
use std::sync::Mutex;

/// Fire-and-forget logging sink. Shared across concurrent invocations.
pub trait ActionLogger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str, cause: Option<&(dyn StdError + 'static)>);
}

/// Forwards everything to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ActionLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str, cause: Option<&(dyn StdError + 'static)>) {
        match cause {
            Some(cause) => tracing::error!(cause = %cause, "{}", message),
            None => tracing::error!("{}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Info(String),
    Error(String),
}

/// Keeps every line in memory so a host can inspect or replay it.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<LogLine>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                LogLine::Error(message) => Some(message),
                LogLine::Info(_) => None,
            })
            .collect()
    }

    fn record(&self, line: LogLine) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

impl ActionLogger for MemoryLogger {
    fn info(&self, message: &str) {
        self.record(LogLine::Info(message.to_string()));
    }

    fn error(&self, message: &str, cause: Option<&(dyn StdError + 'static)>) {
        let message = match cause {
            Some(cause) => format!("{message}: {cause}"),
            None => message.to_string(),
        };
        self.record(LogLine::Error(message));
    }
}
