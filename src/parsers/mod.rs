//! Catalog document loading.
//!
//! Reads a catalog document in JSON or YAML and converts it into a validated
//! [`Catalog`]. The format is taken from the file extension when there is a
//! known one, otherwise it is sniffed from the content.
//!
//! ## Usage
//!
//! ```no_run
//! use facet_filter::parsers::parse_catalog;
//! use std::path::Path;
//!
//! let catalog = parse_catalog(Path::new("catalog.yaml")).unwrap();
//! println!("{} items in {} groups", catalog.item_count(), catalog.group_count());
//! ```

mod detection;
mod document;

pub use detection::DocumentFormat;
pub use document::{CatalogDocument, FacetEntry, GroupEntry, ItemEntry};

use crate::error::{FacetFilterError, ParseErrorKind, Result};
use crate::model::Catalog;
use std::path::Path;

/// Load and validate a catalog file
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content =
        std::fs::read_to_string(path).map_err(|e| FacetFilterError::io(path, e))?;
    let format = DocumentFormat::detect(Some(path), &content);
    tracing::debug!(path = %path.display(), format = %format, "loading catalog");
    parse_with_format(&content, format, &path.display().to_string())
}

/// Parse and validate a catalog from a string, sniffing the format
pub fn parse_catalog_str(content: &str) -> Result<Catalog> {
    parse_with_format(content, DocumentFormat::from_content(content), "inline")
}

fn parse_with_format(content: &str, format: DocumentFormat, context: &str) -> Result<Catalog> {
    decode(content, format, context)?.into_catalog()
}

fn decode(content: &str, format: DocumentFormat, context: &str) -> Result<CatalogDocument> {
    if content.trim().is_empty() {
        return Err(FacetFilterError::parse(
            context,
            ParseErrorKind::EmptyDocument,
        ));
    }

    match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| {
            FacetFilterError::parse(context, ParseErrorKind::InvalidJson(e.to_string()))
        }),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            FacetFilterError::parse(context, ParseErrorKind::InvalidYaml(e.to_string()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
facets:
  - id: t1
    label: Smoke
  - t2
groups:
  - id: G1
    name: Get user
    items:
      - id: I1
        facets: [t1, t2]
      - id: I2
        facets: [t2]
  - id: G2
    items:
      - id: I3
        facets: [t3]
"#;

    #[test]
    fn test_parse_yaml() {
        let catalog = parse_catalog_str(YAML).unwrap();
        assert_eq!(catalog.group_count(), 2);
        assert_eq!(catalog.item_count(), 3);
        assert_eq!(catalog.item("I3").unwrap().group.as_str(), "G2");
        assert_eq!(catalog.group("G1").unwrap().name.as_deref(), Some("Get user"));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"facets": ["t1"], "groups": [{"id": "G1", "items": [{"id": "I1", "facets": ["t1"]}]}]}"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.item_count(), 1);
    }

    #[test]
    fn test_empty_document() {
        let err = parse_catalog_str("   \n").unwrap_err();
        assert!(matches!(
            err,
            FacetFilterError::Parse {
                source: ParseErrorKind::EmptyDocument,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_catalog_str("{\"groups\": [").unwrap_err();
        assert!(matches!(
            err,
            FacetFilterError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_item_across_groups_rejected() {
        let yaml = "groups:\n  - id: G1\n    items: [{id: I1}]\n  - id: G2\n    items: [{id: I1}]\n";
        let err = parse_catalog_str(yaml).unwrap_err();
        assert!(err.integrity_kind().is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_catalog(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, FacetFilterError::Io { .. }));
    }
}
