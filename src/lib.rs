//! hdrgen - single-header tooling for header-only C++ libraries
//!
//! Header-only libraries are often shipped as one self-contained header in
//! addition to their regular include tree. This crate builds that file and
//! fetches the third-party single header the library's tests depend on.
//!
//! # Core Modules
//!
//! - [`amalgamate`] - Recursive `#include` inlining with `#line` bookkeeping,
//!   duplicate collapsing, copyright stripping and the generated banner
//! - [`fetch`] - Download of a pinned remote file unless it is already present
//! - [`config`] - Optional project file (`hdrgen.toml`)
//! - [`cli`] - Command-line interface built on `clap`
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - Atomic file replacement and logging setup
//!
//! # Example
//!
//! ```bash
//! hdrgen amalgamate -i include/boost/leaf/detail/all.hpp -p include -o test/leaf.hpp boost/leaf
//! hdrgen fetch
//! ```
//!
//! Running `amalgamate` twice on unchanged sources leaves the output file
//! untouched, so build systems watching it do not rebuild.

pub mod amalgamate;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod fetch;
pub mod utils;
