//! Turning a raw selection into a validated check configuration

use std::collections::{BTreeMap, BTreeSet};

use super::catalog::RuleCatalog;
use super::error::{CheckError, CheckResult};
use crate::storage::{normalize_bucket_path, StorageError};

/// Raw rule selection as written in a configuration file
#[derive(Debug, Clone, Copy)]
pub struct RuleSelection<'a> {
    pub use_: &'a [String],
    pub except: &'a [String],
    pub ignore: &'a [String],
    pub ignore_only: &'a BTreeMap<String, Vec<String>>,
}

/// Validated selection: which rules run and where they are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    rule_ids: BTreeSet<String>,
    ignore_root_paths: BTreeSet<String>,
    ignore_id_to_root_paths: BTreeMap<String, BTreeSet<String>>,
}

impl CheckConfig {
    /// Enabled rule ids, sorted
    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.rule_ids.iter().map(String::as_str)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.rule_ids.contains(id)
    }

    /// Paths ignored for every rule
    pub fn ignore_root_paths(&self) -> &BTreeSet<String> {
        &self.ignore_root_paths
    }

    /// Paths ignored for a single rule id
    pub fn ignore_root_paths_for(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.ignore_id_to_root_paths.get(id)
    }

    pub fn ignore_id_to_root_paths(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.ignore_id_to_root_paths
    }
}

impl RuleCatalog {
    /// Validate `selection` against this catalog
    ///
    /// Checks run in order: unknown names (use, except and ignore_only
    /// keys together), use/except overlap, then paths.
    pub fn select(&self, selection: RuleSelection<'_>) -> CheckResult<CheckConfig> {
        let unknown: BTreeSet<String> = selection
            .use_
            .iter()
            .chain(selection.except)
            .chain(selection.ignore_only.keys())
            .filter(|name| !self.contains(name))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(CheckError::UnknownRules {
                kind: self.name().to_string(),
                names: unknown.into_iter().collect(),
            });
        }

        let excepted: BTreeSet<&String> = selection.except.iter().collect();
        let overlap: BTreeSet<String> = selection
            .use_
            .iter()
            .filter(|name| excepted.contains(name))
            .cloned()
            .collect();
        if !overlap.is_empty() {
            return Err(CheckError::UseAndExcept {
                kind: self.name().to_string(),
                names: overlap.into_iter().collect(),
            });
        }

        let mut rule_ids = if selection.use_.is_empty() {
            self.expand_all(self.default_use())
        } else {
            self.expand_all(selection.use_)
        };
        for id in self.expand_all(selection.except) {
            rule_ids.remove(&id);
        }

        let ignore_root_paths = selection
            .ignore
            .iter()
            .map(|path| self.normalize_root_path(path))
            .collect::<CheckResult<BTreeSet<String>>>()?;

        let mut ignore_id_to_root_paths: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (name, paths) in selection.ignore_only {
            let paths = paths
                .iter()
                .map(|path| self.normalize_root_path(path))
                .collect::<CheckResult<BTreeSet<String>>>()?;
            if paths.is_empty() {
                continue;
            }
            for id in self.expand(name) {
                ignore_id_to_root_paths
                    .entry(id)
                    .or_default()
                    .extend(paths.iter().cloned());
            }
        }

        Ok(CheckConfig {
            rule_ids,
            ignore_root_paths,
            ignore_id_to_root_paths,
        })
    }

    fn normalize_root_path(&self, path: &str) -> CheckResult<String> {
        normalize_bucket_path(path).map_err(|e| CheckError::InvalidPath {
            kind: self.name().to_string(),
            path: path.to_string(),
            reason: match e {
                StorageError::InvalidPath { reason, .. } => reason,
                other => other.to_string(),
            },
        })
    }
}
