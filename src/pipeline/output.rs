//! Where reports go and how they are rendered.
//!
//! A [`ReportSink`] settles the three output decisions a command makes once:
//! the destination, the concrete format, and whether to colorize.

use crate::config::OutputConfig;
use crate::reports::{create_reporter_with_options, ReportFormat, ReportGenerator};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Destination of a rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to a TTY
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Write `content` to the target
    pub fn write(&self, content: &str, quiet: bool) -> Result<()> {
        match self {
            Self::Stdout => println!("{content}"),
            Self::File(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                if !quiet {
                    tracing::info!("Report written to {}", path.display());
                }
            }
        }
        Ok(())
    }
}

/// Resolved output settings for one command run
#[derive(Debug, Clone)]
pub struct ReportSink {
    target: OutputTarget,
    format: ReportFormat,
    use_color: bool,
}

impl ReportSink {
    /// Resolve `auto` format and color against the destination.
    ///
    /// `auto` renders a summary on an interactive terminal and JSON
    /// everywhere else. Color needs a terminal, no `--no-color`, and no
    /// `NO_COLOR` in the environment.
    pub fn from_config(output: &OutputConfig) -> Self {
        let target = OutputTarget::from_option(output.file.clone());
        let terminal = target.is_terminal();
        let format = match output.format {
            ReportFormat::Auto if terminal => ReportFormat::Summary,
            ReportFormat::Auto => ReportFormat::Json,
            other => other,
        };
        let use_color = terminal && !output.no_color && std::env::var_os("NO_COLOR").is_none();
        Self {
            target,
            format,
            use_color,
        }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Reporter for the resolved format
    pub fn reporter(&self) -> Box<dyn ReportGenerator> {
        create_reporter_with_options(self.format, self.use_color)
    }

    pub fn write(&self, content: &str, quiet: bool) -> Result<()> {
        self.target.write(content, quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn output(format: ReportFormat, file: Option<PathBuf>) -> OutputConfig {
        OutputConfig {
            format,
            file,
            no_color: false,
        }
    }

    #[test]
    fn test_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        let path = PathBuf::from("/tmp/decisions.json");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_explicit_format_is_kept() {
        let sink = ReportSink::from_config(&output(ReportFormat::Table, None));
        assert_eq!(sink.format(), ReportFormat::Table);
        assert_eq!(sink.reporter().format(), ReportFormat::Table);
    }

    #[test]
    fn test_auto_to_file_is_json_without_color() {
        let sink = ReportSink::from_config(&output(
            ReportFormat::Auto,
            Some(PathBuf::from("/tmp/decisions.json")),
        ));
        assert_eq!(sink.format(), ReportFormat::Json);
        assert!(!sink.use_color);
    }

    #[test]
    fn test_write_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        let sink = ReportSink::from_config(&output(ReportFormat::Json, Some(path.clone())));
        sink.write("hello", true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let target = OutputTarget::File(tmp.path().join("missing").join("out.txt"));
        assert!(target.write("hello", true).is_err());
    }
}
