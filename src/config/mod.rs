//! Configuration for hdrgen
//!
//! The only configuration source is the optional project file `hdrgen.toml`,
//! handled by [`project`]. It lets a repository pin its amalgamation inputs,
//! banner text and fetch targets so the build only needs `hdrgen amalgamate`.

pub mod project;

pub use project::{AmalgamateSection, FetchSection, ProjectConfig, resolve_path};
