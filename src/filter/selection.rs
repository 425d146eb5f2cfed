//! Active facet selection.

use crate::model::FacetId;
use indexmap::IndexSet;
use serde::Serialize;

/// The set of currently active facets.
///
/// A facet is either present or absent, never twice. Equality ignores the
/// order facets were activated in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    active: IndexSet<FacetId>,
}

impl SelectionState {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a facet between active and inactive.
    ///
    /// Any identifier is accepted, including ones no item carries. Returns
    /// whether the facet is active after the call.
    pub fn toggle(&mut self, facet: &str) -> bool {
        if self.active.shift_remove(facet) {
            tracing::trace!(facet, "facet deactivated");
            false
        } else {
            self.active.insert(FacetId::new(facet));
            tracing::trace!(facet, "facet activated");
            true
        }
    }

    pub fn is_active(&self, facet: &str) -> bool {
        self.active.contains(facet)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active facets in activation order
    pub fn active(&self) -> impl Iterator<Item = &FacetId> {
        self.active.iter()
    }

    /// Deactivate every facet
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

impl<F: Into<FacetId>> FromIterator<F> for SelectionState {
    /// Collect into a selection; repeated ids collapse rather than cancel out
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().map(Into::into).collect(),
        }
    }
}
