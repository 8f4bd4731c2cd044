//! Core types for hdrgen
//!
//! This module holds the error system shared by every command:
//! - [`HdrgenError`] - Enumerated error types covering every failure mode
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format

pub mod error;

pub use error::{ErrorContext, HdrgenError, user_friendly_error};
