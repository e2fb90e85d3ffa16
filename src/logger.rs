use crate::Chronometer;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fmt::Display;

/// Writes records to stdout with the time elapsed since start-up.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    level: LevelFilter,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            chronometer: Chronometer::new(),
            level,
        }
    }

    /// Installs a logger as the `log` backend. Fails if one is already set.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format(format_args!("[{}] {}", record.level(), record.args())));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::Logger;
    use log::{Level, LevelFilter, Log, Metadata};

    #[test]
    fn enabled() {
        let logger = Logger::new(LevelFilter::Info);
        assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
        assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
    }

    #[test]
    fn format() {
        let line = Logger::new(LevelFilter::Info).format("GET /codecs");
        assert!(line.starts_with("GET /codecs (00:00."), "{}", line);
        assert!(line.ends_with(" elapsed)"), "{}", line);
    }
}
