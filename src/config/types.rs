//! Configuration types for facet-filter operations.

use crate::filter::MatchMode;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override file settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Filtering options
    pub filter: FilterConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the match mode.
    pub const fn match_mode(mut self, mode: MatchMode) -> Self {
        self.config.filter.match_mode = mode;
        self
    }

    /// Set the facets activated before any toggle.
    pub fn initial_facets(mut self, facets: Vec<String>) -> Self {
        self.config.filter.initial_facets = facets;
        self
    }

    /// Report only visible entries.
    pub const fn visible_only(mut self, visible_only: bool) -> Self {
        self.config.filter.visible_only = visible_only;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit non-zero when active facets match nothing.
    pub const fn fail_on_empty(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_empty = fail;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Filtering options
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// How active facets combine: any (union) or all (intersection)
    pub match_mode: MatchMode,
    /// Facets activated, in order, before any CLI toggle
    pub initial_facets: Vec<String>,
    /// Leave hidden items and groups out of reports
    pub visible_only: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when facets are active but no item is visible
    pub fail_on_empty: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            fail_on_empty: true,
        }
    }
}
