//! Core traits and types for bucket storage

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncRead;

use crate::cancellation::CancellationToken;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Nothing exists at the path; callers may treat this as absence
    #[error("path not found: {0}")]
    NotFound(String),

    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("object already closed: {0}")]
    AlreadyClosed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Other(String),
}

impl StorageError {
    /// Whether this error signals a missing object rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// An object fetched from a bucket
///
/// Reading goes through `AsyncRead`. Holders must call `close` exactly once
/// when done, on every exit path; its error is part of the operation's
/// outcome, not something to discard.
#[async_trait]
pub trait ReadObject: AsyncRead + Unpin + Send {
    /// Path of the object relative to its bucket
    fn path(&self) -> &str;

    /// Release the object
    async fn close(&mut self) -> StorageResult<()>;
}

/// Read-only view of a tree of objects addressed by relative path
///
/// Implementations:
/// - `MemoryReadBucket`: in-memory map, for tests and embedded defaults
/// - `OsReadBucket`: a directory on the local filesystem
/// - Custom implementations (archives, remote object stores, etc.)
#[async_trait]
pub trait ReadBucket: Send + Sync {
    /// Fetch the object at `path`
    ///
    /// Must return `StorageError::NotFound` when no object exists at the
    /// path, and should return `StorageError::Cancelled` when `cancel` has
    /// fired before the fetch completes.
    async fn get(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> StorageResult<Box<dyn ReadObject>>;
}

/// Normalize a relative bucket path, rejecting anything that escapes the root
pub(crate) fn normalize_bucket_path(path: &str) -> StorageResult<String> {
    let invalid = |reason: &str| StorageError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };
    if path.starts_with('/') || path.starts_with('\\') {
        return Err(invalid("must be relative"));
    }
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() {
                    return Err(invalid("escapes the bucket root"));
                }
            }
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return Err(invalid("empty"));
    }
    Ok(parts.join("/"))
}
