//! Rule-selection validation shared by the breaking and lint builders
//!
//! A `RuleCatalog` knows which rule ids and categories exist. Selecting
//! from it turns the raw `use`/`except`/`ignore`/`ignore_only` lists into a
//! `CheckConfig`, or a `CheckError` naming every offending entry.

mod catalog;
mod error;
mod selection;

pub use catalog::{Rule, RuleCatalog};
pub use error::{CheckError, CheckResult};
pub use selection::{CheckConfig, RuleSelection};
