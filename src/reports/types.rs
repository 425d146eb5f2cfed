//! Report type definitions.

use crate::filter::{FacetButton, FacetWidget};
use crate::model::{CatalogIndex, FacetId};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary if TTY, JSON otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Brief summary output grouped by container
    Summary,
    /// Compact table for terminal (colored)
    Table,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
        }
    }
}

/// Options shared by all reporters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Leave hidden items and groups out of the report
    pub visible_only: bool,
    /// Catalog file the decisions were computed for
    pub catalog_path: Option<String>,
}

impl ReportConfig {
    /// Report only visible entries
    #[must_use]
    pub fn visible_only(mut self, visible_only: bool) -> Self {
        self.visible_only = visible_only;
        self
    }

    /// Record which catalog file the report describes
    #[must_use]
    pub fn catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }
}

/// A facet that items carry but the catalog never declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndeclaredFacet {
    pub id: FacetId,
    pub item_count: usize,
}

/// Everything a facet listing shows: the buttons plus stray facets
#[derive(Debug, Clone, Serialize)]
pub struct FacetListing {
    pub facets: Vec<FacetButton>,
    pub undeclared: Vec<UndeclaredFacet>,
}

impl FacetListing {
    /// Build the listing for a widget's catalog and current selection
    pub fn from_widget(widget: &FacetWidget) -> Self {
        let catalog = widget.catalog();
        let index = CatalogIndex::build(catalog);
        let undeclared = catalog
            .undeclared_facets()
            .into_iter()
            .map(|id| UndeclaredFacet {
                item_count: index.facet_usage(id.as_str()),
                id: id.clone(),
            })
            .collect();

        Self {
            facets: widget.facet_buttons(),
            undeclared,
        }
    }
}
