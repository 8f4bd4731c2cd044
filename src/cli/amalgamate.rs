//! Build the single-header distribution.
//!
//! # Examples
//!
//! ```bash
//! # Everything from hdrgen.toml
//! hdrgen amalgamate
//!
//! # Fully explicit
//! hdrgen amalgamate -i include/boost/leaf/detail/all.hpp -p include -o test/leaf.hpp \
//!     --hash "$(git rev-parse HEAD)" boost/leaf
//!
//! # Re-expand every include, with live #line directives
//! hdrgen amalgamate --expand-all boost/leaf
//! ```
//!
//! The output is rendered into a temporary file next to the destination and
//! only moved into place when its bytes differ from the existing file.

use super::RunContext;
use crate::amalgamate::{
    AmalgamateOptions, AmalgamationReport, Amalgamator, Banner, ExpansionPolicy, LineRefs,
};
use crate::config::resolve_path;
use crate::constants::{DEFAULT_INCLUDE_PATH, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::utils::fs::{OutputStatus, replace_if_changed, staging_file_for};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Generate a single header from a file including multiple C/C++ headers.
#[derive(Args, Debug, Clone, Default)]
pub struct AmalgamateCommand {
    /// Input file (defaults to `in.cpp`)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (defaults to `out.cpp`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include path include names are resolved against (defaults to `.`)
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub include_path: Option<PathBuf>,

    /// Source-control hash stamped into the banner
    #[arg(long, value_name = "SHA")]
    pub hash: Option<String>,

    /// Emit live `#line` directives instead of commented-out ones
    #[arg(long)]
    pub linerefs: bool,

    /// Inline every include instead of collapsing repeats (implies `--linerefs`)
    #[arg(long)]
    pub expand_all: bool,

    /// Include prefix, e.g. `boost/leaf`; only includes under it are inlined
    #[arg(value_name = "PREFIX")]
    pub prefix: Option<String>,
}

/// Outcome of [`AmalgamateCommand::run`].
#[derive(Debug)]
pub struct AmalgamateOutcome {
    pub output: PathBuf,
    pub report: AmalgamationReport,
    pub status: OutputStatus,
}

impl AmalgamateCommand {
    pub async fn execute(self, ctx: &RunContext) -> Result<()> {
        let today = chrono::Local::now().date_naive();
        let outcome = self.run(ctx, today)?;

        if !ctx.quiet {
            let report = &outcome.report;
            println!(
                "{} {} {} ({} headers inlined, {} includes collapsed, {} lines)",
                "✓".green(),
                outcome.output.display().to_string().bold(),
                outcome.status,
                report.distinct_headers(),
                report.collapsed,
                report.total_lines
            );
        }
        Ok(())
    }

    /// Resolve settings, render the amalgamation and swap it into place.
    pub fn run(&self, ctx: &RunContext, generated_on: NaiveDate) -> Result<AmalgamateOutcome> {
        let section = &ctx.config.amalgamate;
        let input = Self::resolve(&self.input, &section.input, DEFAULT_INPUT, &ctx.project_dir);
        let output = Self::resolve(&self.output, &section.output, DEFAULT_OUTPUT, &ctx.project_dir);
        let include_root = Self::resolve(
            &self.include_path,
            &section.include_path,
            DEFAULT_INCLUDE_PATH,
            &ctx.project_dir,
        );
        let prefix = self.prefix.clone().or_else(|| section.prefix.clone()).unwrap_or_default();

        let line_refs = LineRefs::from_flag(self.linerefs || section.line_refs.unwrap_or(false));
        let policy = if self.expand_all || section.expand_all.unwrap_or(false) {
            ExpansionPolicy::Always
        } else {
            ExpansionPolicy::Once
        };

        let mut options = AmalgamateOptions::new(&include_root, prefix)
            .with_line_refs(line_refs)
            .with_policy(policy);
        if let Some(marker) = &section.copyright_marker {
            options = options.with_copyright_marker(marker.clone());
        }

        // Validate the prefix before any output is touched
        let amalgamator = Amalgamator::new(options)?;
        let banner = Banner::new(&section.banner, generated_on).with_hash(self.hash.as_deref());

        if !ctx.quiet {
            println!("{} {}:", "Rebuilding".cyan(), input.display());
        }
        debug!(
            "Writing {} (include path {}, {:?}, {:?})",
            output.display(),
            include_root.display(),
            line_refs,
            policy
        );

        let mut staged = staging_file_for(&output)?;
        let report = {
            let mut writer = BufWriter::new(staged.as_file_mut());
            let report = amalgamator.amalgamate(&input, &banner, &mut writer)?;
            writer.flush().context("Failed to flush staged output")?;
            report
        };
        let status = replace_if_changed(staged, &output)?;
        debug!("{} {}", output.display(), status);

        Ok(AmalgamateOutcome {
            output,
            report,
            status,
        })
    }

    /// CLI value as given, else the config value against the project
    /// directory, else the default against the project directory.
    fn resolve(
        flag: &Option<PathBuf>,
        configured: &Option<PathBuf>,
        default: &str,
        project_dir: &Path,
    ) -> PathBuf {
        match (flag, configured) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => resolve_path(project_dir, path),
            (None, None) => resolve_path(project_dir, Path::new(default)),
        }
    }
}
