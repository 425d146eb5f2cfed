//! Validate command handler.
//!
//! Implements the `validate` subcommand: loads a catalog and reports either
//! a short summary or the integrity violation that rejected it.

use crate::error::FacetFilterError;
use crate::model::{Catalog, CatalogIndex};
use crate::pipeline::{exit_codes, OutputTarget};
use anyhow::Result;
use std::path::Path;

/// Run the validate command, returning the desired exit code.
///
/// A rejected catalog is not an error of the command itself: the violation
/// is printed and [`exit_codes::ERROR`] is returned.
pub fn run_validate(catalog_path: &Path, quiet: bool) -> Result<i32> {
    match crate::parsers::parse_catalog(catalog_path) {
        Ok(catalog) => {
            let report = validation_summary(catalog_path, &catalog);
            OutputTarget::Stdout.write(&report, quiet)?;
            Ok(exit_codes::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", describe_failure(catalog_path, &err));
            Ok(exit_codes::ERROR)
        }
    }
}

fn validation_summary(path: &Path, catalog: &Catalog) -> String {
    let index = CatalogIndex::build(catalog);
    let undeclared = catalog.undeclared_facets();

    let mut lines = vec![
        format!("{}: valid", path.display()),
        format!(
            "  {} groups, {} items, {} declared facets",
            catalog.group_count(),
            catalog.item_count(),
            catalog.facet_count()
        ),
    ];
    if !index.untagged_items().is_empty() {
        lines.push(format!(
            "  {} item(s) carry no facet and are hidden by any selection",
            index.untagged_items().len()
        ));
    }
    if !undeclared.is_empty() {
        let names: Vec<&str> = undeclared.iter().map(|f| f.as_str()).collect();
        lines.push(format!("  undeclared facets: {}", names.join(", ")));
    }
    let empty_groups = catalog.groups().filter(|g| g.items.is_empty()).count();
    if empty_groups > 0 {
        lines.push(format!(
            "  {empty_groups} group(s) have no items and are hidden whenever a facet is active"
        ));
    }
    lines.join("\n")
}

fn describe_failure(path: &Path, err: &FacetFilterError) -> String {
    match err.integrity_kind() {
        Some(kind) => format!("{}: invalid catalog: {kind}", path.display()),
        None => format!("{}: {err}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Facet, Item};
    use tempfile::TempDir;

    #[test]
    fn test_validate_accepts_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"facets": ["t1"], "groups": [{"id": "G1", "items": [{"id": "I1", "facets": ["t1"]}]}]}"#,
        )
        .unwrap();
        assert_eq!(run_validate(&path, true).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_validate_rejects_blank_facet() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"groups": [{"id": "G1", "items": [{"id": "I1", "facets": [""]}]}]}"#,
        )
        .unwrap();
        assert_eq!(run_validate(&path, true).unwrap(), exit_codes::ERROR);
    }

    #[test]
    fn test_validation_summary_notes() {
        let catalog = Catalog::builder()
            .facet(Facet::new("t1"))
            .group("G1", None)
            .group("G2", None)
            .item(Item::new("I1", "G1").with_facets(["t1", "t9"]))
            .item(Item::new("I2", "G1"))
            .build()
            .unwrap();

        let summary = validation_summary(Path::new("c.yaml"), &catalog);
        assert!(summary.starts_with("c.yaml: valid"));
        assert!(summary.contains("2 groups, 2 items, 1 declared facets"));
        assert!(summary.contains("1 item(s) carry no facet"));
        assert!(summary.contains("undeclared facets: t9"));
        assert!(summary
            .contains("1 group(s) have no items and are hidden whenever a facet is active"));
        assert!(!summary.contains("never show"));
    }

    #[test]
    fn test_describe_failure_names_violation() {
        let err = FacetFilterError::duplicate_id("item", "I1");
        let text = describe_failure(Path::new("c.yaml"), &err);
        assert_eq!(text, "c.yaml: invalid catalog: duplicate item identifier 'I1'");
    }
}
