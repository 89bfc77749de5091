//! Configuration resolution
//!
//! `Provider` turns a `protocheck.yaml` (from a `ReadBucket`) or an
//! in-memory JSON/YAML buffer into a validated `ResolvedConfig`:
//!
//! 1. strictly decode into `ExternalConfig` (unknown keys are errors)
//! 2. run the registered `ExternalConfigModifier`, if any
//! 3. validate the breaking and lint sections through their builders
//! 4. assemble the result

mod builders;
mod decode;
mod error;
mod external;
mod provider;
mod resolved;

pub use builders::{
    BreakingConfigBuilder, CatalogBreakingBuilder, CatalogLintBuilder, LintConfigBuilder,
};
pub use decode::{decode_json_or_yaml_strict, decode_yaml_strict};
pub use error::{BoxError, ConfigError, ConfigResult};
pub use external::{ExternalBreakingConfig, ExternalBuildConfig, ExternalConfig, ExternalLintConfig};
pub use provider::{
    with_external_config_modifier, ExternalConfigModifier, Provider, ProviderOption,
    CONFIG_FILE_PATH,
};
pub use resolved::ResolvedConfig;
