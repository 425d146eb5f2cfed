//! Report generators for filter results.
//!
//! Every reporter renders two things: the visibility decisions of a filter
//! run, and the facet listing (buttons with their active state).

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{FacetListing, ReportConfig, ReportFormat, UndeclaredFacet};

use crate::filter::VisibilityDecisions;
use crate::model::Catalog;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the decisions of one filter run
    fn generate_filter_report(
        &self,
        decisions: &VisibilityDecisions,
        catalog: &Catalog,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render the facet buttons and their state
    fn generate_facets_report(
        &self,
        listing: &FacetListing,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
    }
}
