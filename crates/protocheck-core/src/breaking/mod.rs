//! Breaking-change rule configuration
//!
//! `ConfigBuilder` validates a raw selection against a catalog (the
//! built-in one by default) and produces an immutable `Config`.

mod rules;

use std::collections::{BTreeMap, BTreeSet};

use crate::check::{CheckConfig, CheckResult, RuleCatalog, RuleSelection};

pub use rules::{catalog, CATEGORY_FILE, CATEGORY_PACKAGE, CATEGORY_WIRE, CATEGORY_WIRE_JSON};

/// Raw breaking-change selection awaiting validation
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub use_: Vec<String>,
    pub except: Vec<String>,
    pub ignore_root_paths: Vec<String>,
    pub ignore_id_or_category_to_root_paths: BTreeMap<String, Vec<String>>,
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
        Ok(Config { check })
    }
}

/// Validated breaking-change configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    check: CheckConfig,
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

    /// The underlying selection
    pub fn check(&self) -> &CheckConfig {
        &self.check
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckError;

    #[test]
    fn test_default_is_file_category() {
        let config = ConfigBuilder::default().new_config().unwrap();
        let expected = catalog().expand(CATEGORY_FILE);
        assert_eq!(config.rule_ids().collect::<Vec<_>>(), expected);
        assert!(config.is_enabled("FILE_SAME_PACKAGE"));
        assert!(!config.is_enabled("PACKAGE_NO_DELETE"));
    }

    #[test]
    fn test_wire_category_with_except() {
        let config = ConfigBuilder {
            use_: vec![CATEGORY_WIRE.to_string()],
            except: vec!["FIELD_SAME_TYPE".to_string()],
            ..Default::default()
        }
        .new_config()
        .unwrap();
        assert!(config.is_enabled("RPC_SAME_REQUEST_TYPE"));
        assert!(!config.is_enabled("FIELD_SAME_TYPE"));
        assert!(!config.is_enabled("FILE_NO_DELETE"));
    }

    #[test]
    fn test_ignore_only_by_rule() {
        let mut ignore_only = BTreeMap::new();
        ignore_only.insert("FIELD_NO_DELETE".to_string(), vec!["legacy/v1".to_string()]);
        let config = ConfigBuilder {
            ignore_root_paths: vec!["vendor".to_string()],
            ignore_id_or_category_to_root_paths: ignore_only,
            ..Default::default()
        }
        .new_config()
        .unwrap();
        assert!(config.ignore_root_paths().contains("vendor"));
        assert!(config.ignore_root_paths_for("FIELD_NO_DELETE").unwrap().contains("legacy/v1"));
    }

    #[test]
    fn test_unknown_rule() {
        let err = ConfigBuilder {
            use_: vec!["FIELD_NO_DELETE".to_string(), "FIELD_NO_RENAME".to_string()],
            ..Default::default()
        }
        .new_config()
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown breaking rule or category: FIELD_NO_RENAME");
        assert!(matches!(err, CheckError::UnknownRules { .. }));
    }
}
