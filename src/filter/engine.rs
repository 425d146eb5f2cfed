//! Filter engine: item matching and group aggregation.

use super::{MatchMode, SelectionState, VisibilityDecisions};
use crate::model::{Catalog, Item};
use indexmap::IndexMap;

/// Computes visibility for every item and group of a catalog.
///
/// The engine holds only its [`MatchMode`]; it reads the catalog and the
/// selection and never mutates either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEngine {
    mode: MatchMode,
}

impl FilterEngine {
    /// Create an engine with fixed match semantics
    pub const fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Decide whether one item matches a non-empty selection.
    ///
    /// With an empty selection `Any` would hide everything and `All` would
    /// show everything; callers must go through [`recompute`](Self::recompute),
    /// which handles the empty case before reaching this rule.
    pub fn item_matches(&self, item: &Item, selection: &SelectionState) -> bool {
        match self.mode {
            MatchMode::Any => selection.active().any(|facet| item.has_facet(facet.as_str())),
            MatchMode::All => selection.active().all(|facet| item.has_facet(facet.as_str())),
        }
    }

    /// Compute the full decision set for the current selection.
    pub fn recompute(&self, selection: &SelectionState, catalog: &Catalog) -> VisibilityDecisions {
        let active_facets: Vec<_> = selection.active().cloned().collect();

        // No active facet: show everything regardless of mode
        if selection.active_count() == 0 {
            return VisibilityDecisions {
                mode: self.mode,
                active_facets,
                items: catalog.items().map(|item| (item.id.clone(), true)).collect(),
                groups: catalog.groups().map(|group| (group.id.clone(), true)).collect(),
            };
        }

        let items: IndexMap<_, _> = catalog
            .items()
            .map(|item| (item.id.clone(), self.item_matches(item, selection)))
            .collect();

        let groups = catalog
            .groups()
            .map(|group| {
                let visible = group
                    .items
                    .iter()
                    .any(|id| items.get(id).copied().unwrap_or(false));
                (group.id.clone(), visible)
            })
            .collect();

        let decisions = VisibilityDecisions {
            mode: self.mode,
            active_facets,
            items,
            groups,
        };

        tracing::debug!(
            mode = %self.mode,
            active = selection.active_count(),
            visible_items = decisions.visible_item_count(),
            visible_groups = decisions.visible_group_count(),
            "recomputed visibility"
        );

        decisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Facet, Item};

    fn catalog() -> Catalog {
        Catalog::builder()
            .facet(Facet::new("t1"))
            .facet(Facet::new("t2"))
            .facet(Facet::new("t3"))
            .group("G1", None)
            .group("G2", None)
            .group("G3", None)
            .item(Item::new("I1", "G1").with_facets(["t1", "t2"]))
            .item(Item::new("I2", "G1").with_facets(["t2"]))
            .item(Item::new("I3", "G2").with_facets(["t3"]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_any_mode_single_facet() {
        let engine = FilterEngine::new(MatchMode::Any);
        let selection: SelectionState = ["t2"].into_iter().collect();
        let d = engine.recompute(&selection, &catalog());
        assert_eq!(d.item_visible("I1"), Some(true));
        assert_eq!(d.item_visible("I2"), Some(true));
        assert_eq!(d.item_visible("I3"), Some(false));
        assert_eq!(d.group_visible("G1"), Some(true));
        assert_eq!(d.group_visible("G2"), Some(false));
    }

    #[test]
    fn test_any_mode_union() {
        let engine = FilterEngine::new(MatchMode::Any);
        let selection: SelectionState = ["t1", "t3"].into_iter().collect();
        let d = engine.recompute(&selection, &catalog());
        assert_eq!(d.item_visible("I1"), Some(true));
        assert_eq!(d.item_visible("I2"), Some(false));
        assert_eq!(d.item_visible("I3"), Some(true));
        assert_eq!(d.visible_group_count(), 2);
    }

    #[test]
    fn test_all_mode_requires_every_facet() {
        let engine = FilterEngine::new(MatchMode::All);
        let selection: SelectionState = ["t1", "t2"].into_iter().collect();
        let d = engine.recompute(&selection, &catalog());
        assert_eq!(d.item_visible("I1"), Some(true));
        assert_eq!(d.item_visible("I2"), Some(false));
        assert_eq!(d.item_visible("I3"), Some(false));
    }

    #[test]
    fn test_empty_selection_shows_everything_in_both_modes() {
        for mode in MatchMode::all() {
            let d = FilterEngine::new(*mode).recompute(&SelectionState::new(), &catalog());
            assert!(d.is_unfiltered());
            assert_eq!(d.hidden_item_count(), 0);
            assert_eq!(d.hidden_group_count(), 0);
            // Empty group is shown by the baseline too
            assert_eq!(d.group_visible("G3"), Some(true));
        }
    }

    #[test]
    fn test_empty_group_hidden_once_filtering() {
        let engine = FilterEngine::new(MatchMode::All);
        let selection: SelectionState = ["t1"].into_iter().collect();
        let d = engine.recompute(&selection, &catalog());
        assert_eq!(d.group_visible("G3"), Some(false));
    }

    #[test]
    fn test_decisions_cover_whole_catalog() {
        let cat = catalog();
        let selection: SelectionState = ["nothing"].into_iter().collect();
        let d = FilterEngine::new(MatchMode::Any).recompute(&selection, &cat);
        assert_eq!(d.items.len(), cat.item_count());
        assert_eq!(d.groups.len(), cat.group_count());
        let order: Vec<&str> = d.items.keys().map(|id| id.as_str()).collect();
        assert_eq!(order, vec!["I1", "I2", "I3"]);
    }
}
