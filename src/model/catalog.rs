//! Catalog of facets, groups and items.
//!
//! A [`Catalog`] is fixed once built: facets and the item-to-group
//! relationship never change for the lifetime of a filter widget. All
//! integrity checks run in [`CatalogBuilder::build`]; a `Catalog` value is
//! therefore always well formed and the filter engine never has to handle a
//! malformed one.

use super::{FacetId, GroupId, ItemId};
use crate::error::{CatalogIntegrityKind, FacetFilterError, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A declared filterable tag with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Facet identifier
    pub id: FacetId,
    /// Human-readable label, presentation only
    pub label: String,
}

impl Facet {
    /// Create a facet whose label is its identifier
    pub fn new(id: impl Into<FacetId>) -> Self {
        let id = id.into();
        Self {
            label: id.to_string(),
            id,
        }
    }

    /// Set the display label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A unit of displayable content owned by exactly one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Owning group
    pub group: GroupId,
    /// Facets carried by this item
    pub facets: IndexSet<FacetId>,
    /// Display name, presentation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Item {
    /// Create an item in the given group with no facets
    pub fn new(id: impl Into<ItemId>, group: impl Into<GroupId>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            facets: IndexSet::new(),
            name: None,
        }
    }

    /// Add facets to this item (duplicates collapse)
    #[must_use]
    pub fn with_facets<I, F>(mut self, facets: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FacetId>,
    {
        self.facets.extend(facets.into_iter().map(Into::into));
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check whether this item carries a facet
    pub fn has_facet(&self, facet: &str) -> bool {
        self.facets.contains(facet)
    }
}

/// A container whose visibility is derived from its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier
    pub id: GroupId,
    /// Display name, presentation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Items owned by this group, in declaration order
    pub items: Vec<ItemId>,
}

/// Validated, immutable catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    facets: IndexMap<FacetId, Facet>,
    groups: IndexMap<GroupId, Group>,
    items: IndexMap<ItemId, Item>,
}

impl Catalog {
    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Declared facets, in declaration order
    pub fn facets(&self) -> impl Iterator<Item = &Facet> {
        self.facets.values()
    }

    /// Groups, in declaration order
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Items, in declaration order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Look up a declared facet
    pub fn facet(&self, id: &str) -> Option<&Facet> {
        self.facets.get(id)
    }

    /// Look up a group
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Look up an item
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Items owned by a group, in declaration order
    pub fn items_in<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Item> + 'a {
        group.items.iter().filter_map(|id| self.items.get(id))
    }

    /// Returns true if the facet is in the declared facet list
    pub fn is_declared(&self, facet: &str) -> bool {
        self.facets.contains_key(facet)
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Facets carried by items but absent from the declared list.
    ///
    /// Allowed: such facets can still be toggled and matched; they just have
    /// no label of their own.
    pub fn undeclared_facets(&self) -> IndexSet<&FacetId> {
        self.items
            .values()
            .flat_map(|item| item.facets.iter())
            .filter(|facet| !self.facets.contains_key(facet.as_str()))
            .collect()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder that collects facets, groups and items and validates them together.
#[derive(Debug, Default)]
#[must_use]
pub struct CatalogBuilder {
    facets: Vec<Facet>,
    groups: Vec<(GroupId, Option<String>)>,
    items: Vec<Item>,
}

impl CatalogBuilder {
    /// Declare a facet
    pub fn facet(mut self, facet: Facet) -> Self {
        self.facets.push(facet);
        self
    }

    /// Declare a group
    pub fn group(mut self, id: impl Into<GroupId>, name: Option<String>) -> Self {
        self.groups.push((id.into(), name));
        self
    }

    /// Add an item; its group must be declared before `build`
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Non-consuming variants for loaders that build in a loop
    pub fn push_facet(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    pub fn push_group(&mut self, id: impl Into<GroupId>, name: Option<String>) {
        self.groups.push((id.into(), name));
    }

    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Validate and freeze the catalog.
    ///
    /// Fails on the first integrity violation: a blank or duplicate id, a
    /// blank facet on an item, or an item whose group is not declared.
    pub fn build(self) -> Result<Catalog> {
        let mut facets: IndexMap<FacetId, Facet> = IndexMap::with_capacity(self.facets.len());
        for facet in self.facets {
            if facet.id.is_blank() {
                return Err(FacetFilterError::empty_facet("facet list"));
            }
            if facets.contains_key(&facet.id) {
                return Err(FacetFilterError::duplicate_id("facet", facet.id.as_str()));
            }
            facets.insert(facet.id.clone(), facet);
        }

        let mut groups: IndexMap<GroupId, Group> = IndexMap::with_capacity(self.groups.len());
        for (id, name) in self.groups {
            if id.is_blank() {
                return Err(FacetFilterError::integrity(
                    "group list",
                    CatalogIntegrityKind::EmptyId { kind: "group" },
                ));
            }
            if groups.contains_key(&id) {
                return Err(FacetFilterError::duplicate_id("group", id.as_str()));
            }
            groups.insert(
                id.clone(),
                Group {
                    id,
                    name,
                    items: Vec::new(),
                },
            );
        }

        let mut items: IndexMap<ItemId, Item> = IndexMap::with_capacity(self.items.len());
        for item in self.items {
            if item.id.is_blank() {
                return Err(FacetFilterError::integrity(
                    format!("group {}", item.group),
                    CatalogIntegrityKind::EmptyId { kind: "item" },
                ));
            }
            if items.contains_key(&item.id) {
                return Err(FacetFilterError::duplicate_id("item", item.id.as_str()));
            }
            if item.facets.iter().any(FacetId::is_blank) {
                return Err(FacetFilterError::empty_facet(format!("item {}", item.id)));
            }
            let Some(group) = groups.get_mut(&item.group) else {
                return Err(FacetFilterError::unknown_group(
                    item.id.as_str(),
                    item.group.as_str(),
                ));
            };
            group.items.push(item.id.clone());
            items.insert(item.id.clone(), item);
        }

        tracing::debug!(
            facets = facets.len(),
            groups = groups.len(),
            items = items.len(),
            "catalog built"
        );

        Ok(Catalog {
            facets,
            groups,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::builder()
            .facet(Facet::new("t1").with_label("Tag one"))
            .facet(Facet::new("t2"))
            .group("G1", Some("First".to_string()))
            .group("G2", None)
            .item(Item::new("I1", "G1").with_facets(["t1", "t2"]))
            .item(Item::new("I2", "G1").with_facets(["t2"]))
            .item(Item::new("I3", "G2").with_facets(["t3"]))
            .build()
            .expect("valid catalog")
    }

    #[test]
    fn test_group_membership_follows_item_order() {
        let catalog = sample();
        let g1 = catalog.group("G1").unwrap();
        let ids: Vec<&str> = catalog.items_in(g1).map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["I1", "I2"]);
        assert_eq!(catalog.item_count(), 3);
        assert_eq!(catalog.group_count(), 2);
    }

    #[test]
    fn test_facet_label_defaults_to_id() {
        let catalog = sample();
        assert_eq!(catalog.facet("t1").unwrap().label, "Tag one");
        assert_eq!(catalog.facet("t2").unwrap().label, "t2");
    }

    #[test]
    fn test_undeclared_facets() {
        let catalog = sample();
        let undeclared: Vec<&str> = catalog
            .undeclared_facets()
            .into_iter()
            .map(FacetId::as_str)
            .collect();
        assert_eq!(undeclared, vec!["t3"]);
    }

    #[test]
    fn test_unknown_group_rejected() {
        let err = Catalog::builder()
            .group("G1", None)
            .item(Item::new("I1", "G2"))
            .build()
            .unwrap_err();
        assert!(matches!(
            err.integrity_kind(),
            Some(CatalogIntegrityKind::UnknownGroup { group, .. }) if group == "G2"
        ));
    }

    #[test]
    fn test_blank_item_facet_rejected() {
        let err = Catalog::builder()
            .group("G1", None)
            .item(Item::new("I1", "G1").with_facets(["ok", " "]))
            .build()
            .unwrap_err();
        assert!(matches!(
            err.integrity_kind(),
            Some(CatalogIntegrityKind::EmptyFacetId { .. })
        ));
    }

    #[test]
    fn test_blank_declared_facet_rejected() {
        let err = Catalog::builder().facet(Facet::new("")).build().unwrap_err();
        assert!(matches!(
            err.integrity_kind(),
            Some(CatalogIntegrityKind::EmptyFacetId { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::builder()
            .group("G1", None)
            .group("G1", None)
            .build()
            .unwrap_err();
        assert_eq!(
            err.integrity_kind(),
            Some(&CatalogIntegrityKind::DuplicateId {
                kind: "group",
                id: "G1".to_string()
            })
        );

        let err = Catalog::builder()
            .group("G1", None)
            .item(Item::new("I1", "G1"))
            .item(Item::new("I1", "G1"))
            .build()
            .unwrap_err();
        assert!(matches!(
            err.integrity_kind(),
            Some(CatalogIntegrityKind::DuplicateId { kind: "item", .. })
        ));
    }

    #[test]
    fn test_duplicate_item_facets_collapse() {
        let item = Item::new("I1", "G1").with_facets(["a", "a", "b"]);
        assert_eq!(item.facets.len(), 2);
        assert!(item.has_facet("a"));
    }

    #[test]
    fn test_empty_group_allowed() {
        let catalog = Catalog::builder().group("G1", None).build().unwrap();
        assert!(catalog.group("G1").unwrap().items.is_empty());
    }
}
