//! Configuration validation for facet-filter.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::*;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.filter.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (i, facet) in self.initial_facets.iter().enumerate() {
            if facet.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("filter.initial_facets[{i}]"),
                    message: "Facet identifier must not be empty".to_string(),
                });
            }
        }

        // Initial facets are toggled in order, so a repeat switches it back off
        let mut seen = std::collections::HashSet::new();
        for facet in &self.initial_facets {
            if !seen.insert(facet.as_str()) {
                errors.push(ConfigError {
                    field: "filter.initial_facets".to_string(),
                    message: format!("Facet '{facet}' is listed more than once"),
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file) = self.file {
            if file.is_dir() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Output path {} is a directory", file.display()),
                });
            } else if let Some(parent) = file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!(
                            "Output directory {} does not exist",
                            parent.display()
                        ),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // BehaviorConfig contains only boolean flags that don't need validation
        Vec::new()
    }
}
