//! facet-filter: faceted tag filtering for grouped item catalogs
//!
//! Toggles facets on a catalog and reports which items and groups remain visible.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use facet_filter::{
    cli,
    config::{AppConfig, BehaviorConfig, FilterConfig, OutputConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
    MatchMode,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nCatalog Formats:",
        "\n  JSON, YAML",
        "\n\nMatch Modes:",
        "\n  any (union), all (intersection)",
        "\n\nOutput Formats:",
        "\n  json, summary, table"
    )
}

#[derive(Parser)]
#[command(name = "facet-filter")]
#[command(version, long_version = build_long_version())]
#[command(about = "Faceted tag filtering for grouped item catalogs", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (or nothing selected)
    1  Facets are active but no item matches
    3  Error occurred

EXAMPLES:
    # Show everything carrying either tag
    facet-filter filter catalog.yaml --tag smoke --tag slow

    # Only items carrying both tags, as JSON
    facet-filter filter catalog.yaml --tag smoke --tag slow --mode all -o json

    # List facet buttons and their usage
    facet-filter facets catalog.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to a config file (default: discovered .facet-filter.yaml)
    #[arg(long, global = true, env = "FACET_FILTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

#[derive(Parser)]
struct FilterArgs {
    /// Catalog document (JSON or YAML)
    catalog: PathBuf,

    /// Facet to toggle; repeat to toggle several, in order
    #[arg(short = 't', long = "tag", value_name = "ID")]
    tags: Vec<String>,

    /// How active facets combine (default from config, else any)
    #[arg(short, long, value_enum)]
    mode: Option<MatchMode>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file (default: stdout)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Leave hidden items and groups out of the report
    #[arg(long)]
    visible_only: bool,

    /// Exit 0 even when active facets match nothing
    #[arg(long)]
    allow_empty: bool,
}

#[derive(Parser)]
struct FacetsArgs {
    /// Catalog document (JSON or YAML)
    catalog: PathBuf,

    /// Facet to show as active; repeat for several
    #[arg(short = 't', long = "tag", value_name = "ID")]
    tags: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file (default: stdout)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Toggle facets on a catalog and report visibility
    Filter(FilterArgs),

    /// List the facets of a catalog
    Facets(FacetsArgs),

    /// Check a catalog for integrity errors
    Validate {
        /// Catalog document (JSON or YAML)
        catalog: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema of the config file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show where config files are searched for
    Path,
    /// Write a commented example config to the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Filter(args) => {
            let overrides = AppConfig {
                filter: FilterConfig {
                    match_mode: MatchMode::default(),
                    initial_facets: args.tags,
                    visible_only: args.visible_only,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    fail_on_empty: !args.allow_empty,
                },
            };
            let mut config = load_config(cli.config.as_deref(), &overrides);
            if let Some(mode) = args.mode {
                config.filter.match_mode = mode;
            }
            cli::run_filter(&args.catalog, &config)
        }

        Commands::Facets(args) => {
            let overrides = AppConfig {
                filter: FilterConfig {
                    initial_facets: args.tags,
                    ..FilterConfig::default()
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    ..BehaviorConfig::default()
                },
            };
            let config = load_config(cli.config.as_deref(), &overrides);
            cli::run_facets(&args.catalog, &config)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Validate { catalog } => cli::run_validate(&catalog, cli.quiet),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "facet-filter", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = facet_filter::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    facet_filter::config::load_or_default(cli.config.as_deref());
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths = [
                    std::env::current_dir().ok(),
                    facet_filter::config::user_config_dir(),
                    dirs::home_dir(),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                match facet_filter::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(facet_filter::config::default_config_path());
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = facet_filter::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Layer CLI arguments over the discovered config file.
fn load_config(explicit: Option<&std::path::Path>, overrides: &AppConfig) -> AppConfig {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(explicit, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config
}
