//! Configuration provider
//!
//! Both entry points converge on `new_config`, so a configuration read from
//! a bucket and the same bytes handed in directly resolve identically.

use std::sync::Arc;

use tokio::io::AsyncReadExt;

use super::builders::{
    BreakingConfigBuilder, CatalogBreakingBuilder, CatalogLintBuilder, LintConfigBuilder,
};
use super::decode::{decode_json_or_yaml_strict, decode_yaml_strict};
use super::error::{BoxError, ConfigError, ConfigResult};
use super::external::ExternalConfig;
use super::resolved::ResolvedConfig;
use crate::cancellation::CancellationToken;
use crate::logging::{self, Logger, NamedLogger, SharedLogger};
use crate::storage::{ReadBucket, ReadObject};
use crate::{log_debug, log_warn};

/// Path of the configuration file relative to the bucket root
pub const CONFIG_FILE_PATH: &str = "protocheck.yaml";

/// Hook that may rewrite the decoded configuration before validation
///
/// Called once per resolution. An error aborts the resolution and is
/// returned to the caller as `ConfigError::Modifier`.
pub type ExternalConfigModifier =
    Arc<dyn Fn(&mut ExternalConfig) -> Result<(), BoxError> + Send + Sync>;

/// Options accepted by `Provider::new`
#[derive(Clone)]
pub enum ProviderOption {
    ExternalConfigModifier(ExternalConfigModifier),
}

impl std::fmt::Debug for ProviderOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderOption::ExternalConfigModifier(_) => f.write_str("ExternalConfigModifier(..)"),
        }
    }
}

/// Register a modifier run after decoding and before validation
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use protocheck_core::config::{with_external_config_modifier, Provider};
/// use protocheck_core::logging::NoOpLogger;
///
/// let provider = Provider::new(
///     Arc::new(NoOpLogger::new()),
///     [with_external_config_modifier(|config| {
///         config.lint.except.push("COMMENT_FIELD".to_string());
///         Ok(())
///     })],
/// );
/// let config = provider.get_config_for_data(b"").unwrap();
/// assert!(!config.lint().is_enabled("COMMENT_FIELD"));
/// ```
pub fn with_external_config_modifier<F>(modifier: F) -> ProviderOption
where
    F: Fn(&mut ExternalConfig) -> Result<(), BoxError> + Send + Sync + 'static,
{
    ProviderOption::ExternalConfigModifier(Arc::new(modifier))
}

/// Resolves `ResolvedConfig`s from buckets or in-memory data
///
/// Holds no mutable state: concurrent resolutions share nothing but the
/// logger, the modifier and the builders.
pub struct Provider {
    logger: NamedLogger,
    external_config_modifier: Option<ExternalConfigModifier>,
    breaking_builder: Arc<dyn BreakingConfigBuilder>,
    lint_builder: Arc<dyn LintConfigBuilder>,
}

impl Provider {
    /// Create a provider using the built-in rule catalogs
    pub fn new(logger: SharedLogger, options: impl IntoIterator<Item = ProviderOption>) -> Self {
        let mut provider = Self {
            logger: NamedLogger::new(logger, "config"),
            external_config_modifier: None,
            breaking_builder: Arc::new(CatalogBreakingBuilder::default()),
            lint_builder: Arc::new(CatalogLintBuilder::default()),
        };
        for option in options {
            provider.apply(option);
        }
        provider
    }

    /// Replace the builders the provider delegates validation to
    pub fn with_builders(
        mut self,
        breaking_builder: Arc<dyn BreakingConfigBuilder>,
        lint_builder: Arc<dyn LintConfigBuilder>,
    ) -> Self {
        self.breaking_builder = breaking_builder;
        self.lint_builder = lint_builder;
        self
    }

    fn apply(&mut self, option: ProviderOption) {
        match option {
            ProviderOption::ExternalConfigModifier(modifier) => {
                self.external_config_modifier = Some(modifier);
            }
        }
    }

    /// Resolve `CONFIG_FILE_PATH` from `bucket`
    ///
    /// A missing file resolves the default configuration. Once the file is
    /// opened it is closed on every path out of this function; a close
    /// failure is reported even when everything else succeeded.
    pub async fn get_config_for_read_bucket(
        &self,
        cancel: &CancellationToken,
        bucket: &dyn ReadBucket,
    ) -> ConfigResult<ResolvedConfig> {
        let _timer = logging::defer(&self.logger, "get_config_for_bucket");

        let mut object = match bucket.get(cancel, CONFIG_FILE_PATH).await {
            Ok(object) => object,
            Err(e) if e.is_not_found() => {
                log_debug!(self.logger, "{} not found, using defaults", CONFIG_FILE_PATH);
                return self.new_config(ExternalConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let result = self.read_object_config(object.as_mut()).await;
        let closed = object.close().await;
        match closed {
            Ok(()) => result,
            Err(close_err) => {
                log_warn!(self.logger, "failed to close {}: {}", object.path(), close_err);
                Err(ConfigError::append(result.err(), close_err.into()))
            }
        }
    }

    /// Resolve configuration from JSON or YAML `data`
    pub fn get_config_for_data(&self, data: &[u8]) -> ConfigResult<ResolvedConfig> {
        let _timer = logging::defer(&self.logger, "get_config_for_data");

        let external = decode_json_or_yaml_strict(data)?;
        self.new_config(external)
    }

    async fn read_object_config(&self, object: &mut dyn ReadObject) -> ConfigResult<ResolvedConfig> {
        let path = object.path().to_string();
        let mut data = Vec::new();
        object
            .read_to_end(&mut data)
            .await
            .map_err(|source| ConfigError::Io { path, source })?;
        let external = decode_yaml_strict(&data)?;
        self.new_config(external)
    }

    fn new_config(&self, mut external: ExternalConfig) -> ConfigResult<ResolvedConfig> {
        if let Some(modifier) = &self.external_config_modifier {
            modifier(&mut external).map_err(ConfigError::Modifier)?;
            log_debug!(self.logger, "applied external config modifier");
        }
        let breaking = self
            .breaking_builder
            .new_breaking_config(&external.breaking)
            .map_err(ConfigError::Breaking)?;
        let lint = self
            .lint_builder
            .new_lint_config(&external.lint)
            .map_err(ConfigError::Lint)?;
        Ok(ResolvedConfig::new(external.build, breaking, lint))
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("logger", &self.logger)
            .field("has_external_config_modifier", &self.external_config_modifier.is_some())
            .finish()
    }
}
