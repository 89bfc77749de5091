//! The validated configuration handed to rule engines

use super::external::ExternalBuildConfig;
use crate::breaking;
use crate::lint;

/// Resolved configuration
///
/// Only constructed by `Provider` after every section validated; there are
/// no setters, so a `ResolvedConfig` can be shared freely (e.g. in an
/// `Arc`) across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    build: ExternalBuildConfig,
    breaking: breaking::Config,
    lint: lint::Config,
}

impl ResolvedConfig {
    pub(crate) fn new(build: ExternalBuildConfig, breaking: breaking::Config, lint: lint::Config) -> Self {
        Self {
            build,
            breaking,
            lint,
        }
    }

    /// Build inputs, exactly as declared
    pub fn build(&self) -> &ExternalBuildConfig {
        &self.build
    }

    pub fn breaking(&self) -> &breaking::Config {
        &self.breaking
    }

    pub fn lint(&self) -> &lint::Config {
        &self.lint
    }
}
