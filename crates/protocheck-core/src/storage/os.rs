//! Bucket backed by a local directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncRead, ReadBuf};

use super::traits::{normalize_bucket_path, ReadBucket, ReadObject, StorageError, StorageResult};
use crate::cancellation::CancellationToken;

/// Read-only bucket rooted at a directory on the local filesystem
///
/// # Example
///
/// ```no_run
/// use protocheck_core::storage::OsReadBucket;
///
/// let bucket = OsReadBucket::new("/path/to/project");
/// ```
#[derive(Debug, Clone)]
pub struct OsReadBucket {
    root: PathBuf,
}

impl OsReadBucket {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the bucket root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ReadBucket for OsReadBucket {
    async fn get(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> StorageResult<Box<dyn ReadObject>> {
        if cancel.is_cancelled() {
            return Err(StorageError::Cancelled);
        }
        let path = normalize_bucket_path(path)?;
        let full_path = self.root.join(&path);

        let metadata = match tokio::fs::metadata(&full_path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(StorageError::Other(format!("{} is not a regular file", path)));
        }

        let opened = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(StorageError::Cancelled),
            opened = File::open(&full_path) => opened,
        };
        let file = match opened {
            Ok(file) => file,
            // Removed between metadata and open
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Box::new(OsReadObject {
            path,
            file: Some(file),
        }))
    }
}

/// Object handed out by `OsReadBucket`
#[derive(Debug)]
pub struct OsReadObject {
    path: String,
    file: Option<File>,
}

impl AsyncRead for OsReadObject {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        let this = self.get_mut();
        match this.file.as_mut() {
            Some(file) => Pin::new(file).poll_read(cx, buf),
            None => Poll::Ready(Err(std::io::Error::new(
                ErrorKind::Other,
                format!("read on closed object {}", this.path),
            ))),
        }
    }
}

#[async_trait]
impl ReadObject for OsReadObject {
    fn path(&self) -> &str {
        &self.path
    }

    async fn close(&mut self) -> StorageResult<()> {
        match self.file.take() {
            Some(file) => {
                drop(file);
                Ok(())
            }
            None => Err(StorageError::AlreadyClosed(self.path.clone())),
        }
    }
}
