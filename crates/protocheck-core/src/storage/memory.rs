//! In-memory bucket

use std::collections::HashMap;
use std::io::Cursor;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::io::{AsyncRead, ReadBuf};

use super::traits::{normalize_bucket_path, ReadBucket, ReadObject, StorageError, StorageResult};
use crate::cancellation::CancellationToken;

/// In-memory bucket for tests and embedded default configurations
///
/// Objects are copied out on `get`, so later writes never affect an object
/// that is already being read.
///
/// # Example
///
/// ```
/// use protocheck_core::storage::MemoryReadBucket;
///
/// let bucket = MemoryReadBucket::new();
/// bucket.put("protocheck.yaml", "lint:\n  use: [BASIC]\n").unwrap();
/// assert_eq!(bucket.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryReadBucket {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryReadBucket {
    /// Create a new empty bucket
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bucket with initial objects
    pub fn with_objects<I, P, D>(objects: I) -> StorageResult<Self>
    where
        I: IntoIterator<Item = (P, D)>,
        P: AsRef<str>,
        D: Into<Vec<u8>>,
    {
        let bucket = Self::new();
        for (path, data) in objects {
            bucket.put(path.as_ref(), data)?;
        }
        Ok(bucket)
    }

    /// Store an object, replacing any existing object at the same path
    pub fn put(&self, path: &str, data: impl Into<Vec<u8>>) -> StorageResult<()> {
        let path = normalize_bucket_path(path)?;
        self.objects.write().insert(path, data.into());
        Ok(())
    }

    /// Remove an object; returns whether it existed
    pub fn remove(&self, path: &str) -> bool {
        match normalize_bucket_path(path) {
            Ok(path) => self.objects.write().remove(&path).is_some(),
            Err(_) => false,
        }
    }

    /// Get the number of objects in the bucket
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Check if the bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReadBucket for MemoryReadBucket {
    async fn get(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> StorageResult<Box<dyn ReadObject>> {
        if cancel.is_cancelled() {
            return Err(StorageError::Cancelled);
        }
        let path = normalize_bucket_path(path)?;
        let data = self
            .objects
            .read()
            .get(&path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.clone()))?;
        Ok(Box::new(MemoryReadObject::new(path, data)))
    }
}

/// Object handed out by `MemoryReadBucket`
#[derive(Debug)]
pub struct MemoryReadObject {
    path: String,
    cursor: Cursor<Vec<u8>>,
    closed: bool,
}

impl MemoryReadObject {
    pub fn new(path: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            cursor: Cursor::new(data),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl AsyncRead for MemoryReadObject {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        let this = self.get_mut();
        if this.closed {
            return Poll::Ready(Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("read on closed object {}", this.path),
            )));
        }
        Pin::new(&mut this.cursor).poll_read(cx, buf)
    }
}

#[async_trait]
impl ReadObject for MemoryReadObject {
    fn path(&self) -> &str {
        &self.path
    }

    async fn close(&mut self) -> StorageResult<()> {
        if self.closed {
            return Err(StorageError::AlreadyClosed(self.path.clone()));
        }
        self.closed = true;
        Ok(())
    }
}
