//! Catalog document format detection.

use std::path::Path;

/// Serialization format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Get the human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Detect the format from a file extension, if it is a known one
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Sniff the format from content.
    ///
    /// A document opening with `{` is JSON; anything else is treated as YAML,
    /// which also accepts most JSON.
    pub fn from_content(content: &str) -> Self {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        if trimmed.starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    /// Extension first, falling back to content sniffing
    pub fn detect(path: Option<&Path>, content: &str) -> Self {
        path.and_then(Self::from_path)
            .unwrap_or_else(|| Self::from_content(content))
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("catalog.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("catalog.yml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn test_from_content() {
        assert_eq!(
            DocumentFormat::from_content("  \n{\"groups\": []}"),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_content("groups: []"),
            DocumentFormat::Yaml
        );
    }

    #[test]
    fn test_extension_wins_over_content() {
        assert_eq!(
            DocumentFormat::detect(Some(Path::new("c.yaml")), "{\"groups\": []}"),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::detect(Some(Path::new("c.txt")), "{\"groups\": []}"),
            DocumentFormat::Json
        );
    }
}
