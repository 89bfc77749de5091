//! Rule catalogs

use std::collections::BTreeSet;

/// A single rule a checker can run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: String,
    pub categories: Vec<String>,
    pub purpose: String,
}

impl Rule {
    pub fn new(id: impl Into<String>, categories: &[&str], purpose: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            purpose: purpose.into(),
        }
    }
}

/// The set of rules and categories a builder validates selections against
///
/// # Example
///
/// ```
/// use protocheck_core::check::{Rule, RuleCatalog};
///
/// let catalog = RuleCatalog::new(
///     "lint",
///     &["STYLE"],
///     &["STYLE"],
///     vec![Rule::new("FIELD_LOWER_SNAKE_CASE", &["STYLE"], "Fields are lower_snake_case.")],
/// );
/// assert!(catalog.is_category("STYLE"));
/// assert_eq!(catalog.expand("STYLE"), vec!["FIELD_LOWER_SNAKE_CASE".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    name: String,
    categories: Vec<String>,
    default_use: Vec<String>,
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Create a catalog
    ///
    /// `default_use` is applied when a selection leaves `use` empty.
    pub fn new(
        name: impl Into<String>,
        categories: &[&str],
        default_use: &[&str],
        mut rules: Vec<Rule>,
    ) -> Self {
        rules.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            name: name.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            default_use: default_use.iter().map(|c| c.to_string()).collect(),
            rules,
        }
    }

    /// Catalog name, used in error messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All rules, sorted by id
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn default_use(&self) -> &[String] {
        &self.default_use
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn is_rule(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn is_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Whether `name` is a rule id or a category
    pub fn contains(&self, name: &str) -> bool {
        self.is_rule(name) || self.is_category(name)
    }

    /// Expand a rule id or category into sorted rule ids
    ///
    /// Unknown names expand to nothing.
    pub fn expand(&self, name: &str) -> Vec<String> {
        if self.is_rule(name) {
            return vec![name.to_string()];
        }
        self.rules
            .iter()
            .filter(|r| r.categories.iter().any(|c| c == name))
            .map(|r| r.id.clone())
            .collect()
    }

    /// Expand several names into a set of rule ids
    pub fn expand_all<'a>(&self, names: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
        names.into_iter().flat_map(|n| self.expand(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RuleCatalog {
        RuleCatalog::new(
            "test",
            &["A", "B"],
            &["A"],
            vec![
                Rule::new("R2", &["A", "B"], "second"),
                Rule::new("R1", &["A"], "first"),
                Rule::new("R3", &["B"], "third"),
            ],
        )
    }

    #[test]
    fn test_rules_sorted_by_id() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn test_expand() {
        let catalog = catalog();
        assert_eq!(catalog.expand("A"), vec!["R1", "R2"]);
        assert_eq!(catalog.expand("R3"), vec!["R3"]);
        assert!(catalog.expand("NOPE").is_empty());

        let names = vec!["A".to_string(), "R3".to_string()];
        assert_eq!(catalog.expand_all(&names).len(), 3);
    }

    #[test]
    fn test_contains() {
        let catalog = catalog();
        assert!(catalog.contains("B"));
        assert!(catalog.contains("R1"));
        assert!(!catalog.contains("r1"));
    }
}
