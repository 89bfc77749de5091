//! Lint rule configuration
//!
//! Same selection model as `breaking`, plus the stylistic options some
//! lint rules read.

mod rules;

use std::collections::{BTreeMap, BTreeSet};

use crate::check::{CheckConfig, CheckError, CheckResult, RuleCatalog, RuleSelection};

pub use rules::{
    catalog, CATEGORY_BASIC, CATEGORY_COMMENTS, CATEGORY_DEFAULT, CATEGORY_MINIMAL,
    CATEGORY_UNARY_RPC,
};

/// Suffix applied when `enum_zero_value_suffix` is left empty
pub const DEFAULT_ENUM_ZERO_VALUE_SUFFIX: &str = "_UNSPECIFIED";
/// Suffix applied when `service_suffix` is left empty
pub const DEFAULT_SERVICE_SUFFIX: &str = "Service";

/// Raw lint selection and options awaiting validation
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub use_: Vec<String>,
    pub except: Vec<String>,
    pub ignore_root_paths: Vec<String>,
    pub ignore_id_or_category_to_root_paths: BTreeMap<String, Vec<String>>,
    pub enum_zero_value_suffix: String,
    pub rpc_allow_same_request_response: bool,
    pub rpc_allow_google_protobuf_empty_requests: bool,
    pub rpc_allow_google_protobuf_empty_responses: bool,
    pub service_suffix: String,
}

impl ConfigBuilder {
    /// Validate against the built-in catalog
    pub fn new_config(&self) -> CheckResult<Config> {
        self.new_config_with(&catalog())
    }

    /// Validate against `catalog`
    pub fn new_config_with(&self, catalog: &RuleCatalog) -> CheckResult<Config> {
        let check = catalog.select(RuleSelection {
            use_: &self.use_,
            except: &self.except,
            ignore: &self.ignore_root_paths,
            ignore_only: &self.ignore_id_or_category_to_root_paths,
        })?;

        let enum_zero_value_suffix = option_or_default(
            catalog,
            "enum_zero_value_suffix",
            &self.enum_zero_value_suffix,
            DEFAULT_ENUM_ZERO_VALUE_SUFFIX,
            |c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_',
            "must contain only A-Z, 0-9 and _",
        )?;
        let service_suffix = option_or_default(
            catalog,
            "service_suffix",
            &self.service_suffix,
            DEFAULT_SERVICE_SUFFIX,
            |c| c.is_ascii_alphanumeric() || c == '_',
            "must contain only letters, digits and _",
        )?;

        Ok(Config {
            check,
            enum_zero_value_suffix,
            rpc_allow_same_request_response: self.rpc_allow_same_request_response,
            rpc_allow_google_protobuf_empty_requests: self.rpc_allow_google_protobuf_empty_requests,
            rpc_allow_google_protobuf_empty_responses: self.rpc_allow_google_protobuf_empty_responses,
            service_suffix,
        })
    }
}

fn option_or_default(
    catalog: &RuleCatalog,
    option: &str,
    value: &str,
    default: &str,
    allowed: impl Fn(char) -> bool,
    reason: &str,
) -> CheckResult<String> {
    if value.is_empty() {
        return Ok(default.to_string());
    }
    if !value.chars().all(allowed) {
        return Err(CheckError::InvalidOption {
            kind: catalog.name().to_string(),
            option: option.to_string(),
            reason: format!("{:?} {}", value, reason),
        });
    }
    Ok(value.to_string())
}

/// Validated lint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    check: CheckConfig,
    enum_zero_value_suffix: String,
    rpc_allow_same_request_response: bool,
    rpc_allow_google_protobuf_empty_requests: bool,
    rpc_allow_google_protobuf_empty_responses: bool,
    service_suffix: String,
}

impl Config {
    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.check.rule_ids()
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.check.is_enabled(id)
    }

    pub fn ignore_root_paths(&self) -> &BTreeSet<String> {
        self.check.ignore_root_paths()
    }

    pub fn ignore_root_paths_for(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.check.ignore_root_paths_for(id)
    }

    pub fn check(&self) -> &CheckConfig {
        &self.check
    }

    pub fn enum_zero_value_suffix(&self) -> &str {
        &self.enum_zero_value_suffix
    }

    pub fn rpc_allow_same_request_response(&self) -> bool {
        self.rpc_allow_same_request_response
    }

    pub fn rpc_allow_google_protobuf_empty_requests(&self) -> bool {
        self.rpc_allow_google_protobuf_empty_requests
    }

    pub fn rpc_allow_google_protobuf_empty_responses(&self) -> bool {
        self.rpc_allow_google_protobuf_empty_responses
    }

    pub fn service_suffix(&self) -> &str {
        &self.service_suffix
    }
}
