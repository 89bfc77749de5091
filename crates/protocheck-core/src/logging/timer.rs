//! Elapsed-time logging for a scoped operation

use std::time::Instant;

use super::traits::Logger;

/// Logs `<operation> took <elapsed>` at debug level when dropped
#[must_use = "the duration is logged when the guard is dropped"]
pub struct DeferGuard<'a> {
    logger: &'a dyn Logger,
    operation: &'static str,
    start: Instant,
}

/// Start timing `operation`; bind the guard to a local for the whole scope
///
/// ```
/// use protocheck_core::logging::{defer, NoOpLogger};
///
/// let logger = NoOpLogger::new();
/// let _timer = defer(&logger, "get_config_for_data");
/// ```
pub fn defer<'a>(logger: &'a dyn Logger, operation: &'static str) -> DeferGuard<'a> {
    DeferGuard {
        logger,
        operation,
        start: Instant::now(),
    }
}

impl Drop for DeferGuard<'_> {
    fn drop(&mut self) {
        self.logger
            .debug(&format!("{} took {:?}", self.operation, self.start.elapsed()));
    }
}
