//! **Faceted tag filtering for grouped item catalogs.**
//!
//! `facet-filter` answers one question: given a catalog of items, each
//! carrying a set of facets (tags) and belonging to exactly one group, and
//! given the facets a user has switched on, which items and which groups
//! should be shown?
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the validated, immutable [`Catalog`] and its
//!   [`CatalogBuilder`], plus a [`CatalogIndex`] for per-facet lookups.
//! - **[`filter`]**: the [`FilterEngine`] and its inputs and outputs:
//!   [`SelectionState`], [`MatchMode`] and [`VisibilityDecisions`]. A
//!   [`FacetWidget`] bundles them into one interactive session.
//! - **[`parsers`]**: loads JSON or YAML catalog documents.
//! - **[`reports`]**: renders decisions and facet listings as JSON, a
//!   grouped summary, or a table.
//! - **[`config`]**: `.facet-filter.yaml` discovery, merging and validation.
//!
//! ## Matching
//!
//! With no facet active, everything is visible. Otherwise an item is
//! visible when it carries *any* active facet ([`MatchMode::Any`], the
//! default) or *all* of them ([`MatchMode::All`]). A group is visible when at
//! least one of its items is.
//!
//! ```no_run
//! use facet_filter::{parse_catalog, FacetWidget, MatchMode};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = parse_catalog(Path::new("catalog.yaml"))?;
//!     let mut widget = FacetWidget::new(catalog, MatchMode::Any);
//!
//!     let decisions = widget.toggle_facet("smoke");
//!     for group in decisions.visible_groups() {
//!         println!("{group}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `facet-filter` binary wraps the same operations: `filter`, `facets`
//! and `validate`, plus config helpers.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{CatalogIntegrityKind, FacetFilterError, ParseErrorKind, Result};
pub use filter::{
    FacetButton, FacetWidget, FilterEngine, MatchMode, SelectionState, SharedWidget,
    VisibilityDecisions, VisibilityRenderer,
};
pub use model::{
    Catalog, CatalogBuilder, CatalogIndex, Facet, FacetId, Group, GroupId, Item, ItemId,
};
pub use parsers::{parse_catalog, parse_catalog_str};
pub use reports::{ReportFormat, ReportGenerator};
