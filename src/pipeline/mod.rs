//! Shared orchestration for CLI command handlers.
//!
//! Catalog loading, report output settings, plus the exit codes every
//! command reports.

mod output;
mod parse;

pub use output::{OutputTarget, ReportSink};
pub use parse::load_catalog_with_context;

/// Exit codes for scripting
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Facets were active but nothing matched
    pub const NO_MATCHES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
