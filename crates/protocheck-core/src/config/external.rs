//! Configuration shape as written in `protocheck.yaml`
//!
//! Every section denies unknown fields, so a misspelled key fails decoding
//! instead of being silently ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalConfig {
    pub build: ExternalBuildConfig,
    pub breaking: ExternalBreakingConfig,
    pub lint: ExternalLintConfig,
}

/// Build inputs; passed through to `ResolvedConfig` unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalBuildConfig {
    pub roots: Vec<String>,
    pub excludes: Vec<String>,
}

/// Breaking-change rule selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalBreakingConfig {
    /// Rule ids or categories to enable; empty means the defaults
    #[serde(rename = "use")]
    pub use_: Vec<String>,
    /// Rule ids or categories to disable
    pub except: Vec<String>,
    /// Root-relative paths ignored by every rule
    pub ignore: Vec<String>,
    /// Rule id or category → root-relative paths ignored by it
    pub ignore_only: BTreeMap<String, Vec<String>>,
}

/// Lint rule selection and stylistic options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalLintConfig {
    #[serde(rename = "use")]
    pub use_: Vec<String>,
    pub except: Vec<String>,
    pub ignore: Vec<String>,
    pub ignore_only: BTreeMap<String, Vec<String>>,
    pub enum_zero_value_suffix: String,
    pub rpc_allow_same_request_response: bool,
    pub rpc_allow_google_protobuf_empty_requests: bool,
    pub rpc_allow_google_protobuf_empty_responses: bool,
    pub service_suffix: String,
}
