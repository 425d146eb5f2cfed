//! Catalog data model.
//!
//! Facets, items and groups as the filter engine sees them. The catalog is
//! assembled and validated once, then shared read-only by every filter
//! computation.
//!
//! # Index Support
//!
//! Presentation code that repeatedly asks per-facet questions should build a
//! [`CatalogIndex`] once:
//!
//! ```ignore
//! let index = CatalogIndex::build(&catalog);
//! let usage = index.facet_usage("smoke");
//! ```

mod catalog;
mod identifiers;
mod index;

pub use catalog::*;
pub use identifiers::*;
pub use index::*;
