//! Single-header amalgamation.
//!
//! The amalgamator reads a root header line by line and inlines every
//! `#include` whose path starts with the configured prefix, recursively.
//! Non-matching lines are copied through byte for byte, whatever their
//! encoding.
//!
//! # Output markers
//!
//! An inlined region is framed by marker comments so the single header stays
//! navigable:
//!
//! ```text
//! // >>> #include <boost/leaf/config.hpp>
//! ...contents of config.hpp...
//! // <<< #include <boost/leaf/config.hpp>
//! // #line 12 "boost/leaf/error.hpp"
//! ```
//!
//! The closing marker and its `#line` directive are only written for includes
//! found inside other included files. The root file never needs a directive to
//! resume its own numbering.
//!
//! # Expansion policies
//!
//! - [`ExpansionPolicy::Once`] (default): a header is inlined the first time it
//!   is met. Later includes of it become a breadcrumb naming the output line of
//!   the first expansion:
//!   `// #include <boost/leaf/config.hpp> // Expanded at line 14`
//! - [`ExpansionPolicy::Always`]: every include is inlined again and `#line`
//!   directives are always live. A header that includes itself is an error.
//!
//! # Copyright blocks
//!
//! Each source header starts with a copyright comment. Starting at the line that
//! contains the copyright marker, `//` lines are dropped up to and including the
//! next blank line, which is replaced by a `#line` directive in included files.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hdrgen_cli::amalgamate::{AmalgamateOptions, Amalgamator, Banner, BannerConfig};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let options = AmalgamateOptions::new("include", "boost/leaf");
//! let config = BannerConfig::default();
//! let banner = Banner::new(&config, chrono::Local::now().date_naive());
//!
//! let mut out = Vec::new();
//! let report = Amalgamator::new(options)?.amalgamate(
//!     Path::new("include/boost/leaf/detail/all.hpp"),
//!     &banner,
//!     &mut out,
//! )?;
//! println!("inlined {} headers", report.expansions.len());
//! # Ok(())
//! # }
//! ```

pub mod banner;
pub mod directive;
pub mod writer;

pub use banner::{Banner, BannerConfig};
pub use directive::{IncludeMatcher, LineRefs};
pub use writer::LineCountingWriter;

use crate::constants::DEFAULT_COPYRIGHT_MARKER;
use crate::core::HdrgenError;
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How repeated includes of the same header are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// Inline each header once; later includes become breadcrumbs
    #[default]
    Once,
    /// Inline every include, always with live `#line` directives
    Always,
}

/// Settings for one amalgamation run.
#[derive(Debug, Clone)]
pub struct AmalgamateOptions {
    /// Directory include names are resolved against
    pub include_root: PathBuf,
    /// Only includes starting with this path are inlined
    pub prefix: String,
    /// Live or commented-out `#line` directives (ignored by [`ExpansionPolicy::Always`])
    pub line_refs: LineRefs,
    /// Expand-once or always-expand
    pub policy: ExpansionPolicy,
    /// Substring opening the copyright block to strip; empty disables stripping
    pub copyright_marker: String,
}

impl AmalgamateOptions {
    /// Options with commented-out line references, expand-once policy and the
    /// default copyright marker.
    pub fn new(include_root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            include_root: include_root.into(),
            prefix: prefix.into(),
            line_refs: LineRefs::default(),
            policy: ExpansionPolicy::default(),
            copyright_marker: DEFAULT_COPYRIGHT_MARKER.to_string(),
        }
    }

    #[must_use]
    pub const fn with_line_refs(mut self, line_refs: LineRefs) -> Self {
        self.line_refs = line_refs;
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: ExpansionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_copyright_marker(mut self, marker: impl Into<String>) -> Self {
        self.copyright_marker = marker.into();
        self
    }

    /// Line references actually written, after the policy has had its say.
    #[must_use]
    pub const fn effective_line_refs(&self) -> LineRefs {
        match self.policy {
            ExpansionPolicy::Always => LineRefs::Live,
            ExpansionPolicy::Once => self.line_refs,
        }
    }
}

/// One inlined header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Include name as written in the directive
    pub name: String,
    /// Output line of the `// >>>` marker opening the region
    pub line: usize,
    /// Nesting depth; includes found in the root file are at depth 1
    pub depth: usize,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmalgamationReport {
    /// Every inlined header, in output order
    pub expansions: Vec<Expansion>,
    /// Includes replaced by a breadcrumb
    pub collapsed: usize,
    /// Lines in the complete output, banner included
    pub total_lines: usize,
}

impl AmalgamationReport {
    /// Number of distinct headers inlined.
    #[must_use]
    pub fn distinct_headers(&self) -> usize {
        self.expansions.iter().map(|e| e.name.as_str()).collect::<HashSet<_>>().len()
    }
}

/// Recursive include expander. A fresh instance is needed per run.
pub struct Amalgamator {
    options: AmalgamateOptions,
    line_refs: LineRefs,
    matcher: IncludeMatcher,
    /// Include name -> output line of its first expansion
    expanded: HashMap<String, usize>,
    seen: HashSet<String>,
    /// Files currently being expanded, root first
    stack: Vec<String>,
    report: AmalgamationReport,
}

impl Amalgamator {
    /// Validate options and build the include matcher.
    ///
    /// # Errors
    ///
    /// Fails with [`HdrgenError::EmptyPrefix`] for an empty prefix.
    pub fn new(options: AmalgamateOptions) -> Result<Self> {
        let matcher = IncludeMatcher::new(&options.prefix)?;
        let line_refs = options.effective_line_refs();
        Ok(Self {
            options,
            line_refs,
            matcher,
            expanded: HashMap::new(),
            seen: HashSet::new(),
            stack: Vec::new(),
            report: AmalgamationReport::default(),
        })
    }

    /// Write the banner, the amalgamated body of `input` and the trailer to `out`.
    ///
    /// # Errors
    ///
    /// - [`HdrgenError::InputNotFound`] if `input` is not a file
    /// - [`HdrgenError::IncludeNotFound`] if a matched include does not exist
    /// - [`HdrgenError::CircularInclude`] for self-including headers under
    ///   [`ExpansionPolicy::Always`]
    /// - any I/O error from reading sources or writing `out`
    ///
    /// Sources do not have to be valid UTF-8. Only include names matched by the
    /// prefix are decoded; an include whose name is not UTF-8 is left as is.
    pub fn amalgamate<W: Write>(
        mut self,
        input: &Path,
        banner: &Banner<'_>,
        out: W,
    ) -> Result<AmalgamationReport> {
        if !input.is_file() {
            return Err(HdrgenError::InputNotFound {
                path: input.display().to_string(),
            }
            .into());
        }
        let content = fs::read(input)
            .with_context(|| format!("Failed to read input file: {}", input.display()))?;

        let mut out = LineCountingWriter::new(out);
        out.write_all(banner.header().as_bytes()).context("Failed to write banner")?;

        let root = input.display().to_string();
        debug!(
            "Amalgamating {} (prefix '{}', include root {}, {:?})",
            root,
            self.matcher.prefix(),
            self.options.include_root.display(),
            self.options.policy
        );
        self.stack.push(root.clone());
        self.append(&root, &content, &mut out, 0)?;
        self.stack.pop();

        out.write_all(banner.trailer().as_bytes()).context("Failed to write trailer")?;
        out.flush().context("Failed to flush output")?;

        self.report.total_lines = out.lines();
        debug!(
            "Inlined {} headers, collapsed {} includes, {} lines",
            self.report.expansions.len(),
            self.report.collapsed,
            self.report.total_lines
        );
        Ok(self.report)
    }

    fn append<W: Write>(
        &mut self,
        name: &str,
        content: &[u8],
        out: &mut LineCountingWriter<W>,
        depth: usize,
    ) -> Result<()> {
        let mut in_copyright = false;

        for (index, line) in content.split_inclusive(|&b| b == b'\n').enumerate() {
            // #line numbering of the source line after this one
            let next_line = index + 2;

            if self.is_copyright_start(line) {
                in_copyright = true;
            }
            if in_copyright {
                if line.starts_with(b"//") {
                    continue;
                }
                if line.trim_ascii().is_empty() {
                    in_copyright = false;
                    if depth > 0 {
                        out.write_all(self.line_refs.directive(next_line, name).as_bytes())?;
                    }
                    continue;
                }
            }

            match self.matcher.include_name(line) {
                Some(include) => {
                    let include = include.to_string();
                    self.include(&include, line, name, next_line, out, depth)?;
                }
                None => out.write_all(line)?,
            }
        }

        Ok(())
    }

    fn include<W: Write>(
        &mut self,
        include: &str,
        line: &[u8],
        current: &str,
        next_line: usize,
        out: &mut LineCountingWriter<W>,
        depth: usize,
    ) -> Result<()> {
        match self.options.policy {
            ExpansionPolicy::Once => {
                if let Some(&first) = self.expanded.get(include) {
                    debug!("{} already expanded at line {}, collapsing", include, first);
                    out.write_all(b"// ")?;
                    out.write_all(line.trim_ascii())?;
                    writeln!(out, " // Expanded at line {first}")?;
                    self.report.collapsed += 1;
                    return Ok(());
                }
            }
            ExpansionPolicy::Always => {
                if self.stack.iter().any(|open| open == include) {
                    let mut chain = self.stack[1..].to_vec();
                    chain.push(include.to_string());
                    return Err(HdrgenError::CircularInclude {
                        chain: chain.join(" -> "),
                    }
                    .into());
                }
            }
        }

        let path = self.options.include_root.join(include);
        if !path.is_file() {
            return Err(HdrgenError::IncludeNotFound {
                name: include.to_string(),
                path: path.display().to_string(),
            }
            .into());
        }
        let content = fs::read(&path)
            .with_context(|| format!("Failed to read included file: {}", path.display()))?;

        let start = out.current_line();
        self.expanded.entry(include.to_string()).or_insert(start);
        if !self.seen.insert(include.to_string()) {
            debug!("Re-expanding {}", include);
        }
        info!("{} ({})", include, start);
        self.report.expansions.push(Expansion {
            name: include.to_string(),
            line: start,
            depth: depth + 1,
        });

        write_marker(out, b"// >>> ", line)?;
        self.stack.push(include.to_string());
        self.append(include, &content, out, depth + 1)?;
        self.stack.pop();

        if depth > 0 {
            write_marker(out, b"// <<< ", line)?;
            out.write_all(self.line_refs.directive(next_line, current).as_bytes())?;
        }

        Ok(())
    }

    fn is_copyright_start(&self, line: &[u8]) -> bool {
        let marker = self.options.copyright_marker.as_bytes();
        !marker.is_empty() && line.windows(marker.len()).any(|window| window == marker)
    }
}

/// Write `tag` followed by the directive line, which may lack its newline.
fn write_marker<W: Write>(out: &mut W, tag: &[u8], line: &[u8]) -> std::io::Result<()> {
    out.write_all(tag)?;
    out.write_all(line)?;
    if !line.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    Ok(())
}
