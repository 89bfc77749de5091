//! Component-scoped logger

use super::traits::{Logger, SharedLogger};

/// Wraps a logger and prefixes every message with `name: `
#[derive(Clone)]
pub struct NamedLogger {
    name: String,
    inner: SharedLogger,
}

impl NamedLogger {
    pub fn new(inner: SharedLogger, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn scoped(&self, message: &str) -> String {
        format!("{}: {}", self.name, message)
    }
}

impl std::fmt::Debug for NamedLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedLogger")
            .field("name", &self.name)
            .finish()
    }
}

impl Logger for NamedLogger {
    fn debug(&self, message: &str) {
        self.inner.debug(&self.scoped(message));
    }

    fn info(&self, message: &str) {
        self.inner.info(&self.scoped(message));
    }

    fn warn(&self, message: &str) {
        self.inner.warn(&self.scoped(message));
    }

    fn error(&self, message: &str) {
        self.inner.error(&self.scoped(message));
    }
}
