//! Configuration module for facet-filter.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use facet_filter::config::{AppConfig, Validatable};
//! use facet_filter::MatchMode;
//!
//! let config = AppConfig::builder()
//!     .match_mode(MatchMode::All)
//!     .initial_facets(vec!["smoke".to_string()])
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.facet-filter.yaml` file in your project root or `~/.config/facet-filter/`:
//!
//! ```yaml
//! filter:
//!   match_mode: all
//! output:
//!   format: table
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, FilterConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    default_config_path, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, user_config_dir,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.facet-filter.yaml` files.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::FacetFilterError::config(format!("schema serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_names_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("match_mode"));
        assert!(schema.contains("initial_facets"));
        assert!(schema.contains("fail_on_empty"));
    }
}
