//! Integration test suite for hdrgen
//!
//! These tests drive the real `hdrgen` binary against temporary projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **amalgamate**: Single-header generation, idempotence and error reporting
//! - **config**: `hdrgen.toml` discovery and precedence
//! - **fetch**: Pinned download against a local HTTP listener

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod amalgamate;
mod config;
mod fetch;
