//! Console logger implementation

use super::traits::Logger;

/// A logger that writes to stderr
///
/// Everything goes to stderr so that rule engines printing results on
/// stdout are not interleaved with resolution chatter.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[protocheck]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn line(&self, level: &str, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{}", self.line("DEBUG", message));
    }

    fn info(&self, message: &str) {
        eprintln!("{}", self.line("INFO", message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.line("WARN", message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.line("ERROR", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_prefix() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.line("INFO", "loaded"), "[protocheck] INFO: loaded");

        let custom = ConsoleLogger::with_prefix("[ci]");
        assert_eq!(custom.line("WARN", "slow"), "[ci] WARN: slow");
    }
}
