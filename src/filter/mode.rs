//! Match semantics for combining active facets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How multiple active facets combine when deciding item visibility.
///
/// Fixed when an engine is constructed; never inferred from the catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Visible when the item carries at least one active facet
    #[default]
    Any,
    /// Visible when the item carries every active facet
    All,
}

impl MatchMode {
    /// Canonical lowercase name, as used in config files and on the CLI
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }

    /// Get display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Any => "Match any tag",
            Self::All => "Match all tags",
        }
    }

    /// Parse a mode from a string name, accepting common aliases
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "any" | "or" | "union" => Some(Self::Any),
            "all" | "and" | "intersection" => Some(Self::All),
            _ => None,
        }
    }

    /// Get all available modes
    pub const fn all() -> &'static [Self] {
        &[Self::Any, Self::All]
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown match mode '{s}' (expected any or all)"))
    }
}
