//! Log sinks for child process output
//!
//! The launcher forwards every line the game prints to a sink, tagged with a
//! logger name. The default sink goes through `tracing`; embedding apps can
//! capture output themselves.

use std::sync::Mutex;

pub trait LogSink: Send + Sync {
    fn log(&self, logger: &str, message: &str);
}

/// Forwards to `tracing` at info level
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, logger: &str, message: &str) {
        tracing::info!(logger = logger, "{}", message);
    }
}

/// Keeps every message in memory, in arrival order
#[derive(Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages logged so far, without their logger names
    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for MemorySink {
    fn log(&self, logger: &str, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((logger.to_string(), message.to_string()));
    }
}
