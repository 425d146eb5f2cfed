//! JSON report generator.

use super::{FacetListing, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::filter::{MatchMode, VisibilityDecisions};
use crate::model::{Catalog, FacetId, GroupId, ItemId};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to pretty-print the output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a compact (non-pretty) JSON reporter
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    catalog: CatalogInfo<'a>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Serialize)]
struct CatalogInfo<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_path: Option<&'a str>,
    facet_count: usize,
    group_count: usize,
    item_count: usize,
}

#[derive(Serialize)]
struct JsonSummary {
    total_items: usize,
    visible_items: usize,
    total_groups: usize,
    visible_groups: usize,
}

#[derive(Serialize)]
struct JsonFilterReport<'a> {
    metadata: JsonReportMetadata<'a>,
    mode: MatchMode,
    active_facets: &'a [FacetId],
    summary: JsonSummary,
    items: IndexMap<&'a ItemId, bool>,
    groups: IndexMap<&'a GroupId, bool>,
}

impl ReportGenerator for JsonReporter {
    fn generate_filter_report(
        &self,
        decisions: &VisibilityDecisions,
        catalog: &Catalog,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let keep = |visible: bool| visible || !config.visible_only;

        let report = JsonFilterReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo::current(),
                generated_at: Utc::now().to_rfc3339(),
                catalog: CatalogInfo {
                    file_path: config.catalog_path.as_deref(),
                    facet_count: catalog.facet_count(),
                    group_count: catalog.group_count(),
                    item_count: catalog.item_count(),
                },
            },
            mode: decisions.mode,
            active_facets: &decisions.active_facets,
            summary: JsonSummary {
                total_items: decisions.items.len(),
                visible_items: decisions.visible_item_count(),
                total_groups: decisions.groups.len(),
                visible_groups: decisions.visible_group_count(),
            },
            items: decisions
                .items
                .iter()
                .filter(|(_, v)| keep(**v))
                .map(|(id, v)| (id, *v))
                .collect(),
            groups: decisions
                .groups
                .iter()
                .filter(|(_, v)| keep(**v))
                .map(|(id, v)| (id, *v))
                .collect(),
        };

        self.render(&report)
    }

    fn generate_facets_report(
        &self,
        listing: &FacetListing,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(listing)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FacetWidget, MatchMode};
    use crate::model::{Facet, Item};

    fn widget() -> FacetWidget {
        let catalog = Catalog::builder()
            .facet(Facet::new("t1"))
            .group("G1", None)
            .group("G2", None)
            .item(Item::new("I1", "G1").with_facets(["t1"]))
            .item(Item::new("I2", "G2"))
            .build()
            .unwrap();
        FacetWidget::new(catalog, MatchMode::Any)
    }

    #[test]
    fn test_filter_report_shape() {
        let mut widget = widget();
        widget.toggle_facet("t1");
        let out = JsonReporter::compact()
            .generate_filter_report(widget.decisions(), widget.catalog(), &ReportConfig::default())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["mode"], "any");
        assert_eq!(json["summary"]["visible_items"], 1);
        assert_eq!(json["items"]["I2"], false);
        assert_eq!(json["groups"]["G1"], true);
        assert_eq!(json["metadata"]["tool"]["name"], "facet-filter");
        assert_eq!(json["metadata"]["catalog"]["item_count"], 2);
        assert!(json["metadata"]["catalog"].get("file_path").is_none());
        assert!(json["metadata"]["generated_at"].is_string());
    }

    #[test]
    fn test_visible_only_drops_hidden() {
        let mut widget = widget();
        widget.toggle_facet("t1");
        let config = ReportConfig::default().visible_only(true);
        let out = JsonReporter::new()
            .generate_filter_report(widget.decisions(), widget.catalog(), &config)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(json["items"].get("I2").is_none());
        assert!(json["groups"].get("G2").is_none());
        // Totals still describe the whole catalog
        assert_eq!(json["summary"]["total_items"], 2);
    }

    #[test]
    fn test_facets_report() {
        let widget = widget();
        let listing = FacetListing::from_widget(&widget);
        let out = JsonReporter::compact()
            .generate_facets_report(&listing, &ReportConfig::default())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["facets"][0]["id"], "t1");
        assert_eq!(json["facets"][0]["active"], false);
        assert_eq!(json["facets"][0]["item_count"], 1);
    }
}
