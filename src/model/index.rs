//! Index structures for catalog lookups.
//!
//! `CatalogIndex` is built once per catalog and answers the questions the
//! presentation side asks repeatedly (how many items carry a facet, which
//! facet a typed label refers to) without rescanning every item.
//!
//! # Example
//!
//! ```ignore
//! use facet_filter::model::{Catalog, CatalogIndex};
//!
//! let index = CatalogIndex::build(&catalog);
//! let count = index.facet_usage("smoke");
//! let facet = index.find_by_label_lower("smoke tests");
//! ```

use super::{Catalog, FacetId, ItemId};
use std::collections::HashMap;

/// Precomputed index over a [`Catalog`].
#[derive(Debug, Clone)]
#[must_use]
pub struct CatalogIndex {
    /// Item ids carrying each facet (declared or not), in item order
    items_by_facet: HashMap<FacetId, Vec<ItemId>>,
    /// Declared facet ids by lowercased label
    by_label_lower: HashMap<String, FacetId>,
    /// Items that carry no facet at all
    untagged_items: Vec<ItemId>,
}

impl CatalogIndex {
    /// Build an index from a catalog.
    pub fn build(catalog: &Catalog) -> Self {
        let mut items_by_facet: HashMap<FacetId, Vec<ItemId>> = HashMap::new();
        let mut untagged_items = Vec::new();

        for item in catalog.items() {
            if item.facets.is_empty() {
                untagged_items.push(item.id.clone());
            }
            for facet in &item.facets {
                items_by_facet
                    .entry(facet.clone())
                    .or_default()
                    .push(item.id.clone());
            }
        }

        let by_label_lower = catalog
            .facets()
            .map(|facet| (facet.label.to_lowercase(), facet.id.clone()))
            .collect();

        Self {
            items_by_facet,
            by_label_lower,
            untagged_items,
        }
    }

    /// Items carrying the facet
    pub fn items_with(&self, facet: &str) -> &[ItemId] {
        self.items_by_facet
            .get(facet)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of items carrying the facet
    pub fn facet_usage(&self, facet: &str) -> usize {
        self.items_with(facet).len()
    }

    /// Resolve a declared facet by its label, ignoring case
    pub fn find_by_label_lower(&self, label: &str) -> Option<&FacetId> {
        self.by_label_lower.get(&label.to_lowercase())
    }

    /// Items that no facet selection can ever reveal
    pub fn untagged_items(&self) -> &[ItemId] {
        &self.untagged_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Facet, Item};

    fn catalog() -> Catalog {
        Catalog::builder()
            .facet(Facet::new("t1").with_label("Smoke Tests"))
            .group("G1", None)
            .item(Item::new("I1", "G1").with_facets(["t1", "t2"]))
            .item(Item::new("I2", "G1").with_facets(["t2"]))
            .item(Item::new("I3", "G1"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_facet_usage() {
        let index = CatalogIndex::build(&catalog());
        assert_eq!(index.facet_usage("t1"), 1);
        assert_eq!(index.facet_usage("t2"), 2);
        assert_eq!(index.facet_usage("missing"), 0);
        assert_eq!(index.items_with("t2")[1].as_str(), "I2");
    }

    #[test]
    fn test_find_by_label() {
        let index = CatalogIndex::build(&catalog());
        assert_eq!(
            index.find_by_label_lower("smoke tests").map(FacetId::as_str),
            Some("t1")
        );
        assert!(index.find_by_label_lower("t2").is_none());
    }

    #[test]
    fn test_untagged_items() {
        let index = CatalogIndex::build(&catalog());
        assert_eq!(index.untagged_items().len(), 1);
        assert_eq!(index.untagged_items()[0].as_str(), "I3");
    }
}
