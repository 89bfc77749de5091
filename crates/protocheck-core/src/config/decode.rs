//! Strict decoding of configuration bytes

use super::error::{ConfigError, ConfigResult};
use super::external::ExternalConfig;

/// Decode YAML, failing on any key `ExternalConfig` does not declare
///
/// Blank input decodes to the default configuration.
pub fn decode_yaml_strict(data: &[u8]) -> ConfigResult<ExternalConfig> {
    if is_blank(data) {
        return Ok(ExternalConfig::default());
    }
    serde_yaml::from_slice(data).map_err(|e| ConfigError::Decode {
        format: "YAML",
        message: e.to_string(),
    })
}

/// Decode JSON or YAML, failing on any key `ExternalConfig` does not declare
///
/// JSON is tried first so that JSON input gets JSON error positions. If
/// neither decoder accepts the input the error carries both messages.
pub fn decode_json_or_yaml_strict(data: &[u8]) -> ConfigResult<ExternalConfig> {
    if is_blank(data) {
        return Ok(ExternalConfig::default());
    }
    let json_err = match serde_json::from_slice(data) {
        Ok(config) => return Ok(config),
        Err(e) => e,
    };
    serde_yaml::from_slice(data).map_err(|yaml_err| ConfigError::Decode {
        format: "JSON or YAML",
        message: format!("json: {}; yaml: {}", json_err, yaml_err),
    })
}

fn is_blank(data: &[u8]) -> bool {
    data.iter().all(u8::is_ascii_whitespace)
}
