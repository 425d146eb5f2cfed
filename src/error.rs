//! Unified error types for facet-filter.
//!
//! The filter engine itself cannot fail; every error in this module is raised
//! while a catalog is being loaded or assembled, or by the surrounding
//! configuration and I/O layers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for facet-filter operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FacetFilterError {
    /// The catalog violates a structural invariant
    #[error("Catalog integrity violated: {context}")]
    CatalogIntegrity {
        context: String,
        #[source]
        source: CatalogIntegrityKind,
    },

    /// The catalog document could not be decoded
    #[error("Failed to parse catalog: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific catalog integrity violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogIntegrityKind {
    #[error("item '{item}' references unknown group '{group}'")]
    UnknownGroup { item: String, group: String },

    #[error("empty facet identifier on {owner}")]
    EmptyFacetId { owner: String },

    #[error("empty {kind} identifier")]
    EmptyId { kind: &'static str },

    #[error("duplicate {kind} identifier '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

/// Specific catalog document parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Empty catalog document")]
    EmptyDocument,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for facet-filter operations
pub type Result<T> = std::result::Result<T, FacetFilterError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl FacetFilterError {
    /// Create a catalog integrity error with context
    pub fn integrity(context: impl Into<String>, source: CatalogIntegrityKind) -> Self {
        Self::CatalogIntegrity {
            context: context.into(),
            source,
        }
    }

    /// An item names a group the catalog does not declare
    pub fn unknown_group(item: impl Into<String>, group: impl Into<String>) -> Self {
        let item = item.into();
        Self::integrity(
            format!("item {item}"),
            CatalogIntegrityKind::UnknownGroup {
                item,
                group: group.into(),
            },
        )
    }

    /// A facet identifier is empty or whitespace-only
    pub fn empty_facet(owner: impl Into<String>) -> Self {
        let owner = owner.into();
        Self::integrity(
            owner.clone(),
            CatalogIntegrityKind::EmptyFacetId { owner },
        )
    }

    /// An identifier of the given kind is declared twice
    pub fn duplicate_id(kind: &'static str, id: impl Into<String>) -> Self {
        let id = id.into();
        Self::integrity(
            format!("{kind} {id}"),
            CatalogIntegrityKind::DuplicateId { kind, id },
        )
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: source.to_string(),
            path: Some(path),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns the integrity violation if this is a catalog integrity error
    pub fn integrity_kind(&self) -> Option<&CatalogIntegrityKind> {
        match self {
            Self::CatalogIntegrity { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FacetFilterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}
