//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod facets;
mod filter;
mod validate;

pub use facets::run_facets;
pub use filter::run_filter;
pub use validate::run_validate;
