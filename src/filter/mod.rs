//! Faceted filtering.
//!
//! The pieces, bottom-up:
//!
//! - [`SelectionState`]: which facets are active
//! - [`MatchMode`]: whether an item needs any or all active facets
//! - [`FilterEngine`]: turns a selection and a catalog into
//!   [`VisibilityDecisions`] for every item and group
//! - [`FacetWidget`]: one widget instance, toggle-then-recompute per event
//!
//! ```
//! use facet_filter::filter::{FacetWidget, MatchMode};
//! use facet_filter::model::{Catalog, Item};
//!
//! let catalog = Catalog::builder()
//!     .group("G1", None)
//!     .item(Item::new("I1", "G1").with_facets(["t1", "t2"]))
//!     .item(Item::new("I2", "G1").with_facets(["t2"]))
//!     .build()?;
//!
//! let mut widget = FacetWidget::new(catalog, MatchMode::All);
//! let decisions = widget.toggle_facet("t1");
//! assert_eq!(decisions.item_visible("I1"), Some(true));
//! assert_eq!(decisions.item_visible("I2"), Some(false));
//! assert_eq!(decisions.group_visible("G1"), Some(true));
//! # Ok::<(), facet_filter::FacetFilterError>(())
//! ```

mod decisions;
mod engine;
mod mode;
mod selection;
mod widget;

pub use decisions::VisibilityDecisions;
pub use engine::FilterEngine;
pub use mode::MatchMode;
pub use selection::SelectionState;
pub use widget::{FacetButton, FacetWidget, SharedWidget, VisibilityRenderer};
