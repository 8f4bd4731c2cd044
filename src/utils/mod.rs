//! Shared utilities
//!
//! - [`fs`] - Directory creation, atomic writes and content-compared replacement
//! - [`logging`] - Tracing subscriber setup for the CLI

pub mod fs;
pub mod logging;

pub use fs::{OutputStatus, atomic_write, ensure_dir, ensure_parent_dir, replace_if_changed};
