//! Doubles shared by unit tests across modules

use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::io::{AsyncRead, ReadBuf};

use crate::breaking;
use crate::cancellation::CancellationToken;
use crate::check::{CheckResult, Rule, RuleCatalog};
use crate::config::{
    BreakingConfigBuilder, CatalogBreakingBuilder, CatalogLintBuilder, ExternalBreakingConfig,
    ExternalLintConfig, LintConfigBuilder, CONFIG_FILE_PATH,
};
use crate::lint;
use crate::logging::Logger;
use crate::storage::{MemoryReadBucket, ReadBucket, ReadObject, StorageError, StorageResult};

/// Records every line it receives
#[derive(Default)]
pub(crate) struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.lines.lock().push(format!("DEBUG {}", message));
    }

    fn info(&self, message: &str) {
        self.lines.lock().push(format!("INFO {}", message));
    }

    fn warn(&self, message: &str) {
        self.lines.lock().push(format!("WARN {}", message));
    }

    fn error(&self, message: &str) {
        self.lines.lock().push(format!("ERROR {}", message));
    }
}

/// Catalog with single-letter rules X, Y and Z in category TEST
fn letters_catalog(name: &str) -> Arc<RuleCatalog> {
    Arc::new(RuleCatalog::new(
        name,
        &["TEST"],
        &["TEST"],
        vec![
            Rule::new("X", &["TEST"], ""),
            Rule::new("Y", &["TEST"], ""),
            Rule::new("Z", &["TEST"], ""),
        ],
    ))
}

/// Breaking builder over the letters catalog that counts calls
pub(crate) struct RecordingBreakingBuilder {
    inner: CatalogBreakingBuilder,
    calls: AtomicUsize,
    last_input: Mutex<Option<ExternalBreakingConfig>>,
}

impl RecordingBreakingBuilder {
    pub(crate) fn new() -> Self {
        Self {
            inner: CatalogBreakingBuilder::new(letters_catalog("breaking")),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_input(&self) -> Option<ExternalBreakingConfig> {
        self.last_input.lock().clone()
    }
}

impl BreakingConfigBuilder for RecordingBreakingBuilder {
    fn new_breaking_config(&self, external: &ExternalBreakingConfig) -> CheckResult<breaking::Config> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock() = Some(external.clone());
        self.inner.new_breaking_config(external)
    }
}

/// Lint builder over the letters catalog that counts calls
pub(crate) struct RecordingLintBuilder {
    inner: CatalogLintBuilder,
    calls: AtomicUsize,
    last_input: Mutex<Option<ExternalLintConfig>>,
}

impl RecordingLintBuilder {
    pub(crate) fn new() -> Self {
        Self {
            inner: CatalogLintBuilder::new(letters_catalog("lint")),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_input(&self) -> Option<ExternalLintConfig> {
        self.last_input.lock().clone()
    }
}

impl LintConfigBuilder for RecordingLintBuilder {
    fn new_lint_config(&self, external: &ExternalLintConfig) -> CheckResult<lint::Config> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock() = Some(external.clone());
        self.inner.new_lint_config(external)
    }
}

/// Bucket holding one configuration file whose objects count closes and
/// can be told to fail on read or close
pub(crate) struct TrackingBucket {
    inner: MemoryReadBucket,
    closes: Arc<AtomicUsize>,
    fail_close: bool,
    fail_read: bool,
}

impl TrackingBucket {
    pub(crate) fn new(config: &str, fail_close: bool) -> Self {
        let inner = MemoryReadBucket::new();
        inner
            .put(CONFIG_FILE_PATH, config)
            .expect("config file path is valid");
        Self {
            inner,
            closes: Arc::new(AtomicUsize::new(0)),
            fail_close,
            fail_read: false,
        }
    }

    /// Make every read on handed-out objects fail
    pub(crate) fn failing_reads(mut self) -> Self {
        self.fail_read = true;
        self
    }

    pub(crate) fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReadBucket for TrackingBucket {
    async fn get(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> StorageResult<Box<dyn ReadObject>> {
        let inner = self.inner.get(cancel, path).await?;
        Ok(Box::new(TrackedObject {
            inner,
            closes: Arc::clone(&self.closes),
            fail_close: self.fail_close,
            fail_read: self.fail_read,
        }))
    }
}

struct TrackedObject {
    inner: Box<dyn ReadObject>,
    closes: Arc<AtomicUsize>,
    fail_close: bool,
    fail_read: bool,
}

impl AsyncRead for TrackedObject {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        let this = self.get_mut();
        if this.fail_read {
            return Poll::Ready(Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "read failed",
            )));
        }
        Pin::new(&mut this.inner).poll_read(cx, buf)
    }
}

#[async_trait]
impl ReadObject for TrackedObject {
    fn path(&self) -> &str {
        self.inner.path()
    }

    async fn close(&mut self) -> StorageResult<()> {
        self.inner.close().await?;
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(StorageError::Other("close failed".to_string()));
        }
        Ok(())
    }
}

/// Bucket whose every fetch fails with a non-not-found error
pub(crate) struct FailingBucket;

#[async_trait]
impl ReadBucket for FailingBucket {
    async fn get(
        &self,
        _cancel: &CancellationToken,
        _path: &str,
    ) -> StorageResult<Box<dyn ReadObject>> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        )))
    }
}
