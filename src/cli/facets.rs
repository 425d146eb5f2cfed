//! Facets command handler.
//!
//! Lists the facet buttons of a catalog with their labels and usage counts.

use crate::config::AppConfig;
use crate::filter::FacetWidget;
use crate::pipeline::{load_catalog_with_context, ReportSink};
use crate::reports::{FacetListing, ReportConfig};
use anyhow::Result;
use std::path::Path;

/// Run the facets command.
///
/// Facets listed in `config.filter.initial_facets` are shown as active.
pub fn run_facets(catalog_path: &Path, config: &AppConfig) -> Result<()> {
    let quiet = config.behavior.quiet;
    let catalog = load_catalog_with_context(catalog_path, quiet)?;

    let facets = super::filter::resolve_facets(&catalog, &config.filter.initial_facets);
    let mut widget = FacetWidget::new(catalog, config.filter.match_mode);
    for facet in &facets {
        widget.toggle_facet(facet);
    }

    let listing = FacetListing::from_widget(&widget);
    if !listing.undeclared.is_empty() && !quiet {
        tracing::warn!(
            "{} facet(s) are used by items but never declared",
            listing.undeclared.len()
        );
    }

    let sink = ReportSink::from_config(&config.output);
    let report = sink
        .reporter()
        .generate_facets_report(&listing, &ReportConfig::default())?;
    sink.write(&report, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_facets_json_listing() {
        let tmp = TempDir::new().unwrap();
        let catalog = tmp.path().join("catalog.yaml");
        std::fs::write(
            &catalog,
            r"
facets:
  - id: smoke
    label: Smoke tests
groups:
  - id: users
    items:
      - id: get-user
        facets: [smoke, slow]
",
        )
        .unwrap();

        let out = tmp.path().join("facets.json");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .quiet(true)
            .build();
        run_facets(&catalog, &config).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(report["facets"][0]["id"], "smoke");
        assert_eq!(report["facets"][0]["label"], "Smoke tests");
        assert_eq!(report["facets"][0]["item_count"], 1);
        assert_eq!(report["undeclared"][0]["id"], "slow");
    }
}
