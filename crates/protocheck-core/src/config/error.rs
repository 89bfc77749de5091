//! Errors that can occur while resolving configuration

use crate::check::CheckError;
use crate::storage::StorageError;

/// Boxed error returned by an `ExternalConfigModifier`
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed input or a key the configuration shape does not declare
    #[error("failed to decode {format} configuration: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    /// Returned verbatim from the registered modifier
    #[error("{0}")]
    Modifier(BoxError),

    #[error(transparent)]
    Breaking(CheckError),

    #[error(transparent)]
    Lint(CheckError),

    /// Several independent failures, e.g. a decode error and a close error
    #[error("{}", join_errors(.0))]
    Multiple(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    /// Combine `next` with an error that may already be in flight
    ///
    /// Neither error is dropped; nested `Multiple`s are flattened.
    pub fn append(existing: Option<ConfigError>, next: ConfigError) -> ConfigError {
        let mut errors = match existing {
            None => return next,
            Some(ConfigError::Multiple(errors)) => errors,
            Some(error) => vec![error],
        };
        match next {
            ConfigError::Multiple(more) => errors.extend(more),
            other => errors.push(other),
        }
        if errors.len() == 1 {
            return errors.remove(0);
        }
        ConfigError::Multiple(errors)
    }

    /// The individual errors; a single error yields itself
    pub fn errors(&self) -> &[ConfigError] {
        match self {
            ConfigError::Multiple(errors) => errors,
            other => std::slice::from_ref(other),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(message: &str) -> ConfigError {
        ConfigError::Decode {
            format: "YAML",
            message: message.to_string(),
        }
    }

    #[test]
    fn test_append_to_nothing_is_identity() {
        let err = ConfigError::append(None, decode("bad"));
        assert!(matches!(err, ConfigError::Decode { .. }));
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn test_append_keeps_both() {
        let err = ConfigError::append(
            Some(decode("bad key")),
            StorageError::Other("close failed".into()).into(),
        );
        assert_eq!(err.errors().len(), 2);
        assert_eq!(
            err.to_string(),
            "failed to decode YAML configuration: bad key; storage error: close failed"
        );
    }

    #[test]
    fn test_append_flattens() {
        let first = ConfigError::append(Some(decode("a")), decode("b"));
        let second = ConfigError::append(Some(decode("c")), decode("d"));
        let err = ConfigError::append(Some(first), second);
        assert_eq!(err.errors().len(), 4);
    }

    #[test]
    fn test_modifier_error_is_verbatim() {
        let err = ConfigError::Modifier("roots must not be empty".into());
        assert_eq!(err.to_string(), "roots must not be empty");
    }
}
