//! Global constants used throughout the hdrgen codebase.
//!
//! Pinned download locations, banner defaults and fallback paths live here so
//! the command-line layer, the config loader and the tests agree on them.

/// Name of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = "hdrgen.toml";

/// Input used when neither the command line nor the config names one.
pub const DEFAULT_INPUT: &str = "in.cpp";

/// Output used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT: &str = "out.cpp";

/// Include search root used when none is given.
pub const DEFAULT_INCLUDE_PATH: &str = ".";

/// Substring that opens a copyright comment block in each source header.
///
/// The block (the marker line plus following `//` lines, up to and including the
/// first blank line) is dropped from the amalgamated output.
pub const DEFAULT_COPYRIGHT_MARKER: &str = "Emil Dotchevski";

/// Number of characters of the source-control hash stamped into the banner.
pub const SHORT_HASH_LEN: usize = 7;

/// Date format used on the banner's `Generated on` line (e.g. `Jan 08, 2026`).
pub const BANNER_DATE_FORMAT: &str = "%b %d, %Y";

/// Include guard wrapped around the generated header.
pub const DEFAULT_GUARD: &str = "BOOST_LEAF_HPP_INCLUDED";

/// First line of the banner comment.
pub const DEFAULT_TITLE: &str = "Boost LEAF single header distribution. Do not edit.";

/// Repository the `--hash` is linked against.
pub const DEFAULT_REPOSITORY: &str = "https://github.com/boostorg/leaf";

/// Where the latest published single header can be downloaded.
pub const DEFAULT_PUBLISHED_URL: &str =
    "https://raw.githubusercontent.com/boostorg/leaf/gh-pages/leaf.hpp";

/// License header written below the banner, one comment line per entry.
pub const DEFAULT_LICENSE: &[&str] = &[
    "Copyright 2018-2024 Emil Dotchevski and Reverge Studios, Inc.",
    "Distributed under the Boost Software License, Version 1.0. (See accompanying",
    "file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)",
];

/// Pinned nlohmann/json single header release.
pub const PINNED_DEPENDENCY_URL: &str =
    "https://github.com/nlohmann/json/releases/download/v3.11.3/json.hpp";

/// Destination of the pinned dependency, relative to the project directory.
pub const PINNED_DEPENDENCY_DEST: &str = "test/nlohmann/json.hpp";
