//! Summary and table report generators for shell output.

use super::{FacetListing, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::filter::VisibilityDecisions;
use crate::model::{Catalog, FacetId, Item};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn join_facets<'a>(facets: impl Iterator<Item = &'a FacetId>) -> String {
    let joined = facets.map(FacetId::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

fn item_label(item: &Item) -> String {
    match &item.name {
        Some(name) => format!("{} {}", item.id, name),
        None => item.id.to_string(),
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn marker(&self, visible: bool) -> String {
        if visible {
            self.color("+", "green")
        } else {
            self.color("-", "dim")
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_filter_report(
        &self,
        decisions: &VisibilityDecisions,
        catalog: &Catalog,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Facet Filter Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}    {} ({})",
            self.color("Mode:", "cyan"),
            decisions.mode,
            decisions.mode.label()
        ));
        let active = if decisions.is_unfiltered() {
            "(none)".to_string()
        } else {
            join_facets(decisions.active_facets.iter())
        };
        lines.push(format!("{}  {}", self.color("Active:", "cyan"), active));
        lines.push(format!("{} {}", self.color("Visible:", "cyan"), decisions.summary()));

        for group in catalog.groups() {
            let visible = decisions.group_visible(group.id.as_str()).unwrap_or(false);
            if config.visible_only && !visible {
                continue;
            }

            lines.push(String::new());
            let heading = match &group.name {
                Some(name) => format!("{} {}", group.id, name),
                None => group.id.to_string(),
            };
            let heading = if visible {
                self.color(&heading, "bold")
            } else {
                self.color(&heading, "dim")
            };
            lines.push(format!("{} {}", self.marker(visible), heading));

            for item in catalog.items_in(group) {
                let item_visible = decisions.item_visible(item.id.as_str()).unwrap_or(false);
                if config.visible_only && !item_visible {
                    continue;
                }
                lines.push(format!(
                    "    {} {}  [{}]",
                    self.marker(item_visible),
                    item_label(item),
                    join_facets(item.facets.iter())
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_facets_report(
        &self,
        listing: &FacetListing,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color("Facets", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if listing.facets.is_empty() {
            lines.push(self.color("(no facets declared)", "dim"));
        }
        for button in &listing.facets {
            let state = if button.active {
                self.color("[x]", "green")
            } else {
                "[ ]".to_string()
            };
            let label = if button.label == button.id.as_str() {
                button.id.to_string()
            } else {
                format!("{} ({})", button.id, button.label)
            };
            lines.push(format!(
                "{} {}  {}",
                state,
                label,
                self.color(&format!("{} items", button.item_count), "dim")
            ));
        }

        if !listing.undeclared.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Undeclared facets used by items:", "yellow"));
            for facet in &listing.undeclared {
                lines.push(format!("    {}  {} items", facet.id, facet.item_count));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

// ============================================================================
// Table reporter
// ============================================================================

/// Table reporter for compact terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn status(&self, visible: bool) -> String {
        // Pad before coloring so escape codes do not skew the column
        if visible {
            self.color(&pad("shown", 8), "green")
        } else {
            self.color(&pad("hidden", 8), "dim")
        }
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_filter_report(
        &self,
        decisions: &VisibilityDecisions,
        catalog: &Catalog,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(
            &format!(
                "{} {} {} {}",
                pad("STATUS", 8),
                pad("GROUP", 20),
                pad("ITEM", 30),
                "FACETS"
            ),
            "bold",
        ));
        lines.push("─".repeat(80));

        for group in catalog.groups() {
            for item in catalog.items_in(group) {
                let visible = decisions.item_visible(item.id.as_str()).unwrap_or(false);
                if config.visible_only && !visible {
                    continue;
                }
                lines.push(format!(
                    "{} {} {} {}",
                    self.status(visible),
                    pad(group.id.as_str(), 20),
                    pad(&item_label(item), 30),
                    join_facets(item.facets.iter())
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "{} ({} {})",
            decisions.summary(),
            decisions.mode,
            join_facets(decisions.active_facets.iter())
        ));

        Ok(lines.join("\n"))
    }

    fn generate_facets_report(
        &self,
        listing: &FacetListing,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color(
            &format!("{} {} {} {}", pad("ACTIVE", 8), pad("FACET", 20), pad("LABEL", 30), "ITEMS"),
            "bold",
        ));
        lines.push("─".repeat(70));

        for button in &listing.facets {
            lines.push(format!(
                "{} {} {} {}",
                pad(if button.active { "yes" } else { "no" }, 8),
                pad(button.id.as_str(), 20),
                pad(&button.label, 30),
                button.item_count
            ));
        }
        for facet in &listing.undeclared {
            lines.push(format!(
                "{} {} {} {}",
                pad("no", 8),
                pad(facet.id.as_str(), 20),
                pad("(undeclared)", 30),
                facet.item_count
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Truncate to a display width, adding an ellipsis when cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width > 3 {
        out.push_str("...");
    }
    out
}

/// Left-align within a display width (wide characters count double).
fn pad(s: &str, width: usize) -> String {
    let text = truncate(s, width);
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
