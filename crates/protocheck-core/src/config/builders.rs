//! Seams between the provider and the rule builders

use std::sync::Arc;

use super::external::{ExternalBreakingConfig, ExternalLintConfig};
use crate::breaking;
use crate::check::{CheckResult, RuleCatalog};
use crate::lint;

/// Builds a validated breaking-change configuration from the raw section
///
/// Implementations:
/// - `CatalogBreakingBuilder`: validates against a `RuleCatalog`
/// - Custom implementations (alternative rule sets, policy servers, etc.)
pub trait BreakingConfigBuilder: Send + Sync {
    fn new_breaking_config(&self, external: &ExternalBreakingConfig) -> CheckResult<breaking::Config>;
}

/// Builds a validated lint configuration from the raw section
pub trait LintConfigBuilder: Send + Sync {
    fn new_lint_config(&self, external: &ExternalLintConfig) -> CheckResult<lint::Config>;
}

impl From<&ExternalBreakingConfig> for breaking::ConfigBuilder {
    fn from(external: &ExternalBreakingConfig) -> Self {
        Self {
            use_: external.use_.clone(),
            except: external.except.clone(),
            ignore_root_paths: external.ignore.clone(),
            ignore_id_or_category_to_root_paths: external.ignore_only.clone(),
        }
    }
}

impl From<&ExternalLintConfig> for lint::ConfigBuilder {
    fn from(external: &ExternalLintConfig) -> Self {
        Self {
            use_: external.use_.clone(),
            except: external.except.clone(),
            ignore_root_paths: external.ignore.clone(),
            ignore_id_or_category_to_root_paths: external.ignore_only.clone(),
            enum_zero_value_suffix: external.enum_zero_value_suffix.clone(),
            rpc_allow_same_request_response: external.rpc_allow_same_request_response,
            rpc_allow_google_protobuf_empty_requests: external.rpc_allow_google_protobuf_empty_requests,
            rpc_allow_google_protobuf_empty_responses: external.rpc_allow_google_protobuf_empty_responses,
            service_suffix: external.service_suffix.clone(),
        }
    }
}

/// Breaking builder backed by a rule catalog (the built-in one by default)
#[derive(Debug, Clone)]
pub struct CatalogBreakingBuilder {
    catalog: Arc<RuleCatalog>,
}

impl CatalogBreakingBuilder {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}

impl Default for CatalogBreakingBuilder {
    fn default() -> Self {
        Self::new(breaking::catalog())
    }
}

impl BreakingConfigBuilder for CatalogBreakingBuilder {
    fn new_breaking_config(&self, external: &ExternalBreakingConfig) -> CheckResult<breaking::Config> {
        breaking::ConfigBuilder::from(external).new_config_with(&self.catalog)
    }
}

/// Lint builder backed by a rule catalog (the built-in one by default)
#[derive(Debug, Clone)]
pub struct CatalogLintBuilder {
    catalog: Arc<RuleCatalog>,
}

impl CatalogLintBuilder {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}

impl Default for CatalogLintBuilder {
    fn default() -> Self {
        Self::new(lint::catalog())
    }
}

impl LintConfigBuilder for CatalogLintBuilder {
    fn new_lint_config(&self, external: &ExternalLintConfig) -> CheckResult<lint::Config> {
        lint::ConfigBuilder::from(external).new_config_with(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_breaking_mapping() {
        let mut ignore_only = BTreeMap::new();
        ignore_only.insert("WIRE".to_string(), vec!["gen".to_string()]);
        let external = ExternalBreakingConfig {
            use_: vec!["PACKAGE".to_string()],
            except: vec!["PACKAGE_NO_DELETE".to_string()],
            ignore: vec!["vendor".to_string()],
            ignore_only,
        };
        let builder = breaking::ConfigBuilder::from(&external);
        assert_eq!(builder.use_, external.use_);
        assert_eq!(builder.ignore_root_paths, external.ignore);
        assert_eq!(builder.ignore_id_or_category_to_root_paths, external.ignore_only);

        let config = CatalogBreakingBuilder::default()
            .new_breaking_config(&external)
            .unwrap();
        assert!(config.is_enabled("PACKAGE_ENUM_NO_DELETE"));
        assert!(!config.is_enabled("PACKAGE_NO_DELETE"));
        assert!(config.ignore_root_paths_for("FIELD_SAME_TYPE").is_some());
    }

    #[test]
    fn test_lint_mapping() {
        let external = ExternalLintConfig {
            use_: vec!["MINIMAL".to_string()],
            enum_zero_value_suffix: "_ZERO".to_string(),
            rpc_allow_google_protobuf_empty_responses: true,
            service_suffix: "Svc".to_string(),
            ..Default::default()
        };
        let config = CatalogLintBuilder::default().new_lint_config(&external).unwrap();
        assert!(config.is_enabled("PACKAGE_DEFINED"));
        assert!(!config.is_enabled("ENUM_PASCAL_CASE"));
        assert_eq!(config.enum_zero_value_suffix(), "_ZERO");
        assert!(config.rpc_allow_google_protobuf_empty_responses());
        assert!(!config.rpc_allow_google_protobuf_empty_requests());
        assert_eq!(config.service_suffix(), "Svc");
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Arc::new(RuleCatalog::new(
            "lint",
            &["HOUSE"],
            &["HOUSE"],
            vec![crate::check::Rule::new("HOUSE_STYLE", &["HOUSE"], "")],
        ));
        let builder = CatalogLintBuilder::new(catalog);
        let config = builder.new_lint_config(&ExternalLintConfig::default()).unwrap();
        assert_eq!(config.rule_ids().collect::<Vec<_>>(), vec!["HOUSE_STYLE"]);
        assert!(builder
            .new_lint_config(&ExternalLintConfig {
                use_: vec!["DEFAULT".to_string()],
                ..Default::default()
            })
            .is_err());
    }
}
