//! Banner and include guard framing the amalgamated header.
//!
//! The generated file looks like this (defaults shown):
//!
//! ```text
//! #ifndef BOOST_LEAF_HPP_INCLUDED
//! #define BOOST_LEAF_HPP_INCLUDED
//!
//! // Boost LEAF single header distribution. Do not edit.
//! // Generated on Jan 08, 2026 from https://github.com/boostorg/leaf/tree/5fde62d.
//!
//! // Latest published version of this file: https://raw.githubusercontent.com/boostorg/leaf/gh-pages/leaf.hpp.
//!
//! // Copyright 2018-2024 Emil Dotchevski and Reverge Studios, Inc.
//! // Distributed under the Boost Software License, Version 1.0. (See accompanying
//! // file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//!
//! ...amalgamated body...
//!
//! #endif // BOOST_LEAF_HPP_INCLUDED
//! ```

use crate::constants::{
    BANNER_DATE_FORMAT, DEFAULT_GUARD, DEFAULT_LICENSE, DEFAULT_PUBLISHED_URL, DEFAULT_REPOSITORY,
    DEFAULT_TITLE, SHORT_HASH_LEN,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Static banner settings, usually read from `[amalgamate.banner]` in `hdrgen.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Include guard macro wrapped around the whole file
    pub guard: String,
    /// First banner comment line
    pub title: String,
    /// Repository the source-control hash links into; no link is written when unset
    pub repository: Option<String>,
    /// Where the latest published copy of the header lives
    pub published_url: Option<String>,
    /// License comment lines, written without the leading `// `
    pub license: Vec<String>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            guard: DEFAULT_GUARD.to_string(),
            title: DEFAULT_TITLE.to_string(),
            repository: Some(DEFAULT_REPOSITORY.to_string()),
            published_url: Some(DEFAULT_PUBLISHED_URL.to_string()),
            license: DEFAULT_LICENSE.iter().map(|line| (*line).to_string()).collect(),
        }
    }
}

/// A banner ready to render for one run.
#[derive(Debug, Clone)]
pub struct Banner<'a> {
    config: &'a BannerConfig,
    generated_on: NaiveDate,
    hash: Option<&'a str>,
}

impl<'a> Banner<'a> {
    pub const fn new(config: &'a BannerConfig, generated_on: NaiveDate) -> Self {
        Self {
            config,
            generated_on,
            hash: None,
        }
    }

    /// Stamp a source-control hash into the `Generated on` line.
    #[must_use]
    pub fn with_hash(mut self, hash: Option<&'a str>) -> Self {
        self.hash = hash;
        self
    }

    /// Text written before the amalgamated body.
    #[must_use]
    pub fn header(&self) -> String {
        let guard = &self.config.guard;
        let mut out = format!("#ifndef {guard}\n#define {guard}\n\n");

        out.push_str(&format!("// {}\n", self.config.title));
        out.push_str(&format!("// Generated on {}", self.generated_on.format(BANNER_DATE_FORMAT)));
        if let Some(link) = self.source_link() {
            out.push_str(&format!(" from {link}"));
        }
        out.push_str(".\n\n");

        if let Some(url) = &self.config.published_url {
            out.push_str(&format!("// Latest published version of this file: {url}.\n\n"));
        }

        if !self.config.license.is_empty() {
            for line in &self.config.license {
                out.push_str(&format!("// {line}\n"));
            }
            out.push('\n');
        }

        out
    }

    /// Text written after the amalgamated body.
    #[must_use]
    pub fn trailer(&self) -> String {
        format!("\n#endif // {}\n", self.config.guard)
    }

    fn source_link(&self) -> Option<String> {
        let repository = self.config.repository.as_deref()?;
        let hash = self.hash.map(str::trim).filter(|h| !h.is_empty())?;
        let short: String = hash.chars().take(SHORT_HASH_LEN).collect();
        Some(format!("{}/tree/{}", repository.trim_end_matches('/'), short))
    }
}
