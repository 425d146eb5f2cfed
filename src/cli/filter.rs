//! Filter command handler.
//!
//! Implements the `filter` subcommand: toggles facets on a catalog and
//! reports which items and groups stay visible.

use crate::config::{AppConfig, Validatable};
use crate::filter::{FacetWidget, VisibilityDecisions};
use crate::model::{Catalog, CatalogIndex};
use crate::pipeline::{exit_codes, load_catalog_with_context, ReportSink};
use crate::reports::ReportConfig;
use anyhow::{bail, Result};
use indexmap::IndexSet;
use std::path::Path;

/// Run the filter command, returning the desired exit code.
///
/// `config.filter.initial_facets` are toggled in order, exactly as a user
/// clicking the buttons would. The caller is responsible for calling
/// `std::process::exit()` with the returned code when it is non-zero.
pub fn run_filter(catalog_path: &Path, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", joined.join("\n  "));
    }

    let quiet = config.behavior.quiet;
    let catalog = load_catalog_with_context(catalog_path, quiet)?;
    let facets = resolve_facets(&catalog, &config.filter.initial_facets);

    let mut widget = FacetWidget::new(catalog, config.filter.match_mode);
    for facet in &facets {
        widget.toggle_facet(facet);
    }

    let decisions = widget.decisions();
    if !quiet {
        tracing::info!("{}", decisions.summary());
    }

    let sink = ReportSink::from_config(&config.output);
    let report_config = ReportConfig::default()
        .visible_only(config.filter.visible_only)
        .catalog_path(catalog_path.display().to_string());

    let report = sink
        .reporter()
        .generate_filter_report(decisions, widget.catalog(), &report_config)?;
    sink.write(&report, quiet)?;

    Ok(determine_exit_code(config, decisions))
}

/// Map each requested facet to a catalog facet id.
///
/// Ids are taken as-is; otherwise a declared facet whose label matches
/// (ignoring case) is used. Anything else is kept and will match nothing.
/// Requests that resolve to an id already requested are dropped, so two
/// spellings of one facet never toggle it back off.
pub(crate) fn resolve_facets(catalog: &Catalog, requested: &[String]) -> Vec<String> {
    let index = CatalogIndex::build(catalog);
    let mut resolved: IndexSet<String> = IndexSet::new();
    for facet in requested {
        let id = if catalog.is_declared(facet) || index.facet_usage(facet) > 0 {
            facet.clone()
        } else if let Some(id) = index.find_by_label_lower(facet) {
            tracing::debug!("Resolved facet label '{}' to '{}'", facet, id);
            id.to_string()
        } else {
            tracing::warn!("Facet '{}' is not declared and no item carries it", facet);
            facet.clone()
        };
        if resolved.contains(&id) {
            tracing::warn!(
                "Facet '{}' resolves to '{}', which is already requested",
                facet,
                id
            );
            continue;
        }
        resolved.insert(id);
    }
    resolved.into_iter().collect()
}

/// Determine the exit code from the decisions and behavior flags.
fn determine_exit_code(config: &AppConfig, decisions: &VisibilityDecisions) -> i32 {
    if config.behavior.fail_on_empty
        && !decisions.is_unfiltered()
        && decisions.visible_item_count() == 0
    {
        return exit_codes::NO_MATCHES;
    }
    exit_codes::SUCCESS
}
