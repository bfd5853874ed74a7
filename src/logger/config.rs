use super::LeveledLogger;
use crate::level::Threshold;
use crate::settings::Log;
use crate::sink::{Sink, SinkOptions};
use crate::style::Style;
use std::sync::Arc;

/// Defaults handed to every logger an application creates: the starting
/// threshold and the shared sink.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    threshold: Threshold,
    sink: Arc<Sink>,
}

impl LoggerConfig {
    pub fn new(threshold: impl Into<Threshold>, sink: Arc<Sink>) -> Self {
        Self {
            threshold: threshold.into(),
            sink,
        }
    }

    pub fn stdout(threshold: impl Into<Threshold>) -> Self {
        Self::new(threshold, Arc::new(Sink::stdout()))
    }

    pub fn from_settings(log: &Log) -> Self {
        let options = SinkOptions {
            microseconds: log.microseconds,
            utc: log.utc,
            call_site: log.call_site,
            ..SinkOptions::default()
        };
        Self::new(log.level, Arc::new(Sink::stdout_with(options)))
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }

    /// Never fails. The new logger starts at the configured threshold and
    /// writes through the shared sink.
    pub fn new_logger(&self, prefix: impl Into<String>, style: Style) -> LeveledLogger {
        LeveledLogger::with_sink(prefix, style, self.threshold, self.sink.clone())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::stdout(Threshold::default())
    }
}
