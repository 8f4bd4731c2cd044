//! File system utilities
//!
//! Directory creation, atomic writes, and the content-compared replacement
//! used to publish the amalgamated header without touching an unchanged file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hdrgen_cli::utils::fs::{atomic_write, ensure_dir};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("test/nlohmann"))?;
//! atomic_write(Path::new("test/nlohmann/json.hpp"), b"// json")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;

pub use atomic::{OutputStatus, atomic_write, replace_if_changed, staging_file_for};
pub use dirs::{ensure_dir, ensure_parent_dir};
