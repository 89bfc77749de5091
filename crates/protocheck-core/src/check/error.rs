//! Validation errors

use thiserror::Error;

/// Errors produced while validating a rule selection
///
/// `kind` is the catalog name (`breaking` or `lint`) so that a message is
/// attributable without further context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("unknown {kind} rule or category: {}", .names.join(", "))]
    UnknownRules { kind: String, names: Vec<String> },

    #[error("{kind} rule or category in both use and except: {}", .names.join(", "))]
    UseAndExcept { kind: String, names: Vec<String> },

    #[error("invalid {kind} ignore path {path:?}: {reason}")]
    InvalidPath {
        kind: String,
        path: String,
        reason: String,
    },

    #[error("invalid {kind} option {option}: {reason}")]
    InvalidOption {
        kind: String,
        option: String,
        reason: String,
    },
}

pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rules_message_lists_every_name() {
        let err = CheckError::UnknownRules {
            kind: "lint".into(),
            names: vec!["FOO".into(), "BAR".into()],
        };
        assert_eq!(err.to_string(), "unknown lint rule or category: FOO, BAR");
    }
}
