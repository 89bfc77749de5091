//! Storage abstractions the provider reads configuration through
//!
//! - `ReadBucket` trait for fetching an object by relative path
//! - `MemoryReadBucket` for tests and embedded defaults
//! - `OsReadBucket` rooted at a local directory

mod traits;
mod memory;
mod os;

pub use traits::{ReadBucket, ReadObject, StorageError, StorageResult};
pub(crate) use traits::normalize_bucket_path;
pub use memory::{MemoryReadBucket, MemoryReadObject};
pub use os::{OsReadBucket, OsReadObject};
