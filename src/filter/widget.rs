//! Filter widget session.
//!
//! Ties a catalog, an engine and a selection together behind the single
//! event the presentation layer sends: toggling a facet button. Each toggle
//! is followed by a full recompute before the call returns, and the result
//! is handed to an optional [`VisibilityRenderer`].

use super::{FilterEngine, MatchMode, SelectionState, VisibilityDecisions};
use crate::model::{Catalog, CatalogIndex, FacetId};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Presentation-side collaborator that applies decisions to markup.
pub trait VisibilityRenderer: Send {
    /// Apply a freshly computed decision set.
    fn apply(&mut self, decisions: &VisibilityDecisions);
}

impl<F> VisibilityRenderer for F
where
    F: FnMut(&VisibilityDecisions) + Send,
{
    fn apply(&mut self, decisions: &VisibilityDecisions) {
        self(decisions);
    }
}

/// State of one facet button, as a renderer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetButton {
    pub id: FacetId,
    pub label: String,
    pub active: bool,
    /// Number of items carrying the facet
    pub item_count: usize,
}

/// A single filter widget instance.
pub struct FacetWidget {
    catalog: Catalog,
    index: CatalogIndex,
    engine: FilterEngine,
    selection: SelectionState,
    decisions: VisibilityDecisions,
    renderer: Option<Box<dyn VisibilityRenderer>>,
}

impl std::fmt::Debug for FacetWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetWidget")
            .field("mode", &self.engine.mode())
            .field("selection", &self.selection)
            .field("has_renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}

impl FacetWidget {
    /// Create a widget with nothing selected; every item starts visible.
    pub fn new(catalog: Catalog, mode: MatchMode) -> Self {
        let engine = FilterEngine::new(mode);
        let selection = SelectionState::new();
        let decisions = engine.recompute(&selection, &catalog);
        Self {
            index: CatalogIndex::build(&catalog),
            catalog,
            engine,
            selection,
            decisions,
            renderer: None,
        }
    }

    /// Attach a renderer and immediately hand it the current decisions
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl VisibilityRenderer + 'static) -> Self {
        let mut renderer: Box<dyn VisibilityRenderer> = Box::new(renderer);
        renderer.apply(&self.decisions);
        self.renderer = Some(renderer);
        self
    }

    /// Toggle a facet and recompute.
    ///
    /// Unknown facet ids are accepted; they match nothing.
    pub fn toggle_facet(&mut self, facet: &str) -> &VisibilityDecisions {
        if !self.catalog.is_declared(facet) && self.index.facet_usage(facet) == 0 {
            tracing::trace!(facet, "toggling facet unknown to the catalog");
        }
        self.selection.toggle(facet);
        self.refresh()
    }

    /// Deactivate every facet and recompute
    pub fn clear(&mut self) -> &VisibilityDecisions {
        self.selection.clear();
        self.refresh()
    }

    fn refresh(&mut self) -> &VisibilityDecisions {
        self.decisions = self.engine.recompute(&self.selection, &self.catalog);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.apply(&self.decisions);
        }
        &self.decisions
    }

    /// One button per declared facet, in declaration order
    pub fn facet_buttons(&self) -> Vec<FacetButton> {
        self.catalog
            .facets()
            .map(|facet| FacetButton {
                id: facet.id.clone(),
                label: facet.label.clone(),
                active: self.selection.is_active(facet.id.as_str()),
                item_count: self.index.facet_usage(facet.id.as_str()),
            })
            .collect()
    }

    pub fn decisions(&self) -> &VisibilityDecisions {
        &self.decisions
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> MatchMode {
        self.engine.mode()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// ============================================================================
// Shared widget
// ============================================================================

/// Thread-safe handle to a [`FacetWidget`].
///
/// The lock is held across toggle and recompute, so two concurrent toggles
/// can never observe or publish a decision set computed between them.
#[derive(Debug, Clone)]
pub struct SharedWidget {
    inner: Arc<Mutex<FacetWidget>>,
}

impl SharedWidget {
    pub fn new(widget: FacetWidget) -> Self {
        Self {
            inner: Arc::new(Mutex::new(widget)),
        }
    }

    /// Toggle a facet and return the resulting decisions
    pub fn toggle_facet(&self, facet: &str) -> VisibilityDecisions {
        self.lock().toggle_facet(facet).clone()
    }

    /// Current decisions
    pub fn decisions(&self) -> VisibilityDecisions {
        self.lock().decisions().clone()
    }

    /// Current selection
    pub fn selection(&self) -> SelectionState {
        self.lock().selection().clone()
    }

    // A panic inside a renderer leaves the selection and decisions from the
    // last completed refresh, which are still consistent.
    fn lock(&self) -> MutexGuard<'_, FacetWidget> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Facet, Item};
    use std::sync::mpsc;

    fn catalog() -> Catalog {
        Catalog::builder()
            .facet(Facet::new("t1").with_label("One"))
            .facet(Facet::new("t2").with_label("Two"))
            .group("G1", None)
            .group("G2", None)
            .item(Item::new("I1", "G1").with_facets(["t1", "t2"]))
            .item(Item::new("I2", "G1").with_facets(["t2"]))
            .item(Item::new("I3", "G2").with_facets(["t3"]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_initial_state_unfiltered() {
        let widget = FacetWidget::new(catalog(), MatchMode::Any);
        assert!(widget.decisions().is_unfiltered());
        assert_eq!(widget.decisions().visible_item_count(), 3);
    }

    #[test]
    fn test_toggle_recomputes() {
        let mut widget = FacetWidget::new(catalog(), MatchMode::Any);
        let d = widget.toggle_facet("t1");
        assert_eq!(d.item_visible("I2"), Some(false));
        assert_eq!(d.group_visible("G2"), Some(false));

        let d = widget.toggle_facet("t1");
        assert!(d.is_unfiltered());
        assert_eq!(d.visible_item_count(), 3);
    }

    #[test]
    fn test_renderer_receives_every_recompute() {
        let (tx, rx) = mpsc::channel();
        let mut widget = FacetWidget::new(catalog(), MatchMode::All)
            .with_renderer(move |d: &VisibilityDecisions| {
                tx.send(d.visible_item_count()).unwrap();
            });
        widget.toggle_facet("t2");
        widget.toggle_facet("t1");
        widget.clear();

        let seen: Vec<usize> = rx.try_iter().collect();
        assert_eq!(seen, vec![3, 2, 1, 3]);
    }

    #[test]
    fn test_facet_buttons() {
        let mut widget = FacetWidget::new(catalog(), MatchMode::Any);
        widget.toggle_facet("t2");
        let buttons = widget.facet_buttons();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label, "One");
        assert!(!buttons[0].active);
        assert_eq!(buttons[0].item_count, 1);
        assert!(buttons[1].active);
        assert_eq!(buttons[1].item_count, 2);
    }

    #[test]
    fn test_shared_widget_across_threads() {
        let shared = SharedWidget::new(FacetWidget::new(catalog(), MatchMode::Any));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared.toggle_facet("t1");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Four toggles of the same facet cancel out
        assert!(shared.selection().is_empty());
        assert!(shared.decisions().is_unfiltered());
    }
}
