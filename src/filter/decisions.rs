//! Visibility decisions emitted by a recompute.

use super::MatchMode;
use crate::model::{FacetId, GroupId, ItemId};
use indexmap::IndexMap;
use serde::Serialize;

/// Show/hide decision for every item and group of a catalog.
///
/// Maps preserve catalog declaration order. The presentation layer decides
/// how `true`/`false` turn into shown/hidden markup.
///
/// Equality treats `active_facets` as a set, matching [`SelectionState`]:
/// re-activating a facet changes its position but not the outcome.
///
/// [`SelectionState`]: super::SelectionState
#[derive(Debug, Clone, Serialize)]
pub struct VisibilityDecisions {
    /// Mode the decisions were computed with
    pub mode: MatchMode,
    /// Facets that were active, in activation order
    pub active_facets: Vec<FacetId>,
    /// Item visibility
    pub items: IndexMap<ItemId, bool>,
    /// Group visibility, derived from item visibility
    pub groups: IndexMap<GroupId, bool>,
}

impl VisibilityDecisions {
    /// Returns true if no facet was active (everything shown)
    pub fn is_unfiltered(&self) -> bool {
        self.active_facets.is_empty()
    }

    /// Visibility of an item; `None` for ids outside the catalog
    pub fn item_visible(&self, id: &str) -> Option<bool> {
        self.items.get(id).copied()
    }

    /// Visibility of a group; `None` for ids outside the catalog
    pub fn group_visible(&self, id: &str) -> Option<bool> {
        self.groups.get(id).copied()
    }

    /// Visible items, in catalog order
    pub fn visible_items(&self) -> impl Iterator<Item = &ItemId> {
        self.items
            .iter()
            .filter_map(|(id, visible)| visible.then_some(id))
    }

    /// Visible groups, in catalog order
    pub fn visible_groups(&self) -> impl Iterator<Item = &GroupId> {
        self.groups
            .iter()
            .filter_map(|(id, visible)| visible.then_some(id))
    }

    pub fn visible_item_count(&self) -> usize {
        self.items.values().filter(|v| **v).count()
    }

    pub fn visible_group_count(&self) -> usize {
        self.groups.values().filter(|v| **v).count()
    }

    pub fn hidden_item_count(&self) -> usize {
        self.items.len() - self.visible_item_count()
    }

    pub fn hidden_group_count(&self) -> usize {
        self.groups.len() - self.visible_group_count()
    }

    /// One-line summary such as `2/3 items, 1/2 groups visible`
    pub fn summary(&self) -> String {
        format!(
            "{}/{} items, {}/{} groups visible",
            self.visible_item_count(),
            self.items.len(),
            self.visible_group_count(),
            self.groups.len()
        )
    }
}

impl PartialEq for VisibilityDecisions {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.active_facets.len() == other.active_facets.len()
            && self
                .active_facets
                .iter()
                .all(|f| other.active_facets.contains(f))
            && self.items == other.items
            && self.groups == other.groups
    }
}

impl Eq for VisibilityDecisions {}
