//! Command-line interface for hdrgen.
//!
//! # Available Commands
//!
//! - `amalgamate` - Concatenate an `#include` tree into one distributable header
//! - `fetch` - Download the pinned third-party single header if it is missing
//!
//! # Global Options
//!
//! All commands support these global options:
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Suppress all output except errors
//! - `--config` - Path to a project config file (defaults to `<project-dir>/hdrgen.toml`)
//! - `--project-dir` - Directory config-relative paths are resolved against
//!
//! # Example
//!
//! ```bash
//! # Rebuild the single header with live #line directives
//! hdrgen amalgamate -i include/boost/leaf/detail/all.hpp -p include -o test/leaf.hpp \
//!     --hash "$(git rev-parse HEAD)" --linerefs boost/leaf
//!
//! # Make sure the test dependency is present
//! hdrgen fetch
//! ```

mod amalgamate;
mod fetch;


use crate::config::ProjectConfig;
use crate::utils::logging::init_logging;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can drive commands without parsing
/// arguments or touching global logging state.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level passed to the tracing filter; `None` defers to `RUST_LOG`
    pub log_level: Option<String>,
    /// Suppress status lines on stdout
    pub quiet: bool,
    /// Explicit config file
    pub config_path: Option<PathBuf>,
    /// Project directory; current directory when `None`
    pub project_dir: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Everything a command needs at execution time.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Directory config-relative and default paths are resolved against
    pub project_dir: PathBuf,
    /// Parsed `hdrgen.toml` (or defaults)
    pub config: ProjectConfig,
    /// Suppress status lines on stdout
    pub quiet: bool,
}

impl RunContext {
    /// Resolve the project directory and load the config file.
    pub async fn load(config: &CliConfig) -> Result<Self> {
        let project_dir = config.project_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let project_config =
            ProjectConfig::discover(config.config_path.as_deref(), &project_dir).await?;
        Ok(Self {
            project_dir,
            config: project_config,
            quiet: config.quiet,
        })
    }
}

/// Single-header generation and dependency fetching for header-only C++ libraries.
#[derive(Parser)]
#[command(
    name = "hdrgen",
    about = "Build single-header distributions of header-only C++ libraries",
    version,
    long_about = "hdrgen inlines a tree of #include-linked headers into one distributable header \
                  and fetches pinned third-party single headers used by the test suite."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the project config file.
    ///
    /// Defaults to `hdrgen.toml` in the project directory; a missing default
    /// file is not an error, a missing explicit file is.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project directory used to resolve paths from the config file and the
    /// built-in defaults.
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single header from a file including multiple C/C++ headers.
    ///
    /// See [`amalgamate::AmalgamateCommand`] for options.
    Amalgamate(amalgamate::AmalgamateCommand),

    /// Download the pinned nlohmann/json single header unless already present.
    ///
    /// See [`fetch::FetchCommand`] for options.
    Fetch(fetch::FetchCommand),
}

impl Cli {
    /// Execute the parsed command line.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        init_logging(config.log_level.as_deref());
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    ///
    /// - `--verbose` maps to the `debug` level
    /// - `--quiet` maps to `error`
    /// - otherwise `RUST_LOG` decides, falling back to `info`
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            config_path: self.config.clone(),
            project_dir: self.project_dir.clone(),
        }
    }

    /// Execute with an externally built configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let ctx = RunContext::load(&config).await?;

        match self.command {
            Commands::Amalgamate(cmd) => cmd.execute(&ctx).await,
            Commands::Fetch(cmd) => cmd.execute(&ctx).await,
        }
    }
}
