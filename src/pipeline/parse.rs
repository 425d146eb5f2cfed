//! Catalog loading stage.
//!
//! Reads a catalog document from disk and reports what was loaded.

use crate::model::Catalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a catalog with context for error messages
pub fn load_catalog_with_context(path: &Path, quiet: bool) -> Result<Catalog> {
    if !quiet {
        tracing::info!("Loading catalog: {}", path.display());
    }

    let catalog = crate::parsers::parse_catalog(path)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Loaded {} groups, {} items, {} facets",
            catalog.group_count(),
            catalog.item_count(),
            catalog.facet_count()
        );
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FacetFilterError;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog_with_context() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.yaml");
        std::fs::write(
            &path,
            "facets: [t1]\ngroups:\n  - id: G1\n    items:\n      - id: I1\n        facets: [t1]\n",
        )
        .unwrap();

        let catalog = load_catalog_with_context(&path, true).unwrap();
        assert_eq!(catalog.item_count(), 1);
    }

    #[test]
    fn test_load_catalog_error_keeps_cause() {
        let err = load_catalog_with_context(Path::new("/nonexistent/catalog.json"), true)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load catalog"));
        assert!(matches!(
            err.downcast_ref::<FacetFilterError>(),
            Some(FacetFilterError::Io { .. })
        ));
    }
}
