//! No-op logger implementation

use super::traits::Logger;

/// A logger that does nothing
///
/// The default for `Provider` when the caller has no logger to hand in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();
        logger.debug("resolving protocheck.yaml");
        logger.error("decode failed");
    }
}
