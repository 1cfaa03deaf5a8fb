//! Configuration module for branch-compare.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.branch-compare.yaml` file in your project root or
//! `~/.config/branch-compare/`:
//!
//! ```yaml
//! source:
//!   local_dir: ./manifests
//! comparison:
//!   version_policy: evr
//! behavior:
//!   fail_on_change: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    default_cache_dir, DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_HOURS, DEFAULT_TIMEOUT_SECS,
    MAX_CACHE_TTL_HOURS,
};
pub use file::{
    discover_config_file, generate_example_config, load_config_file,
    ConfigFileError, CONFIG_FILE_NAMES,
};
pub use types::{AppConfig, BehaviorConfig, ComparisonConfig, OutputConfig, SourceConfig};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.branch-compare.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        for section in ["source", "comparison", "output", "behavior", "version_policy"] {
            assert!(schema.contains(section), "{section}");
        }
    }
}
