//! Protocheck Core
//!
//! Resolves `protocheck.yaml` into the configuration the breaking-change
//! and lint rule engines run with.
//!
//! ## Resolution
//!
//! A `Provider` reads the file from any `ReadBucket` (or takes JSON/YAML
//! bytes directly), decodes it strictly, lets an optional modifier rewrite
//! it, and validates the `breaking` and `lint` sections:
//!
//! ```rust,ignore
//! use protocheck_core::{CancellationToken, ConsoleLogger, OsReadBucket, Provider};
//!
//! let provider = Provider::new(Arc::new(ConsoleLogger::new()), []);
//! let bucket = OsReadBucket::new("/path/to/project");
//! let config = provider
//!     .get_config_for_read_bucket(&CancellationToken::new(), &bucket)
//!     .await?;
//!
//! for id in config.lint().rule_ids() {
//!     println!("{id}");
//! }
//! ```

pub mod breaking;
pub mod cancellation;
pub mod check;
pub mod config;
pub mod lint;
pub mod logging;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use cancellation::CancellationToken;

pub use check::{CheckError, CheckResult, Rule, RuleCatalog};

pub use config::{
    with_external_config_modifier, BoxError, BreakingConfigBuilder, ConfigError, ConfigResult,
    ExternalConfig, ExternalConfigModifier, LintConfigBuilder, Provider, ProviderOption,
    ResolvedConfig, CONFIG_FILE_PATH,
};

pub use logging::{ConsoleLogger, Logger, NamedLogger, NoOpLogger, SharedLogger};

pub use storage::{
    MemoryReadBucket, OsReadBucket, ReadBucket, ReadObject, StorageError, StorageResult,
};
