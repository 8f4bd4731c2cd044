//! Error handling for hdrgen
//!
//! This module provides the error types and user-friendly error reporting for
//! the `hdrgen` tools. Like the rest of the crate it is built around two ideas:
//! 1. **Strongly-typed errors** ([`HdrgenError`]) for the failure modes callers
//!    may want to match on
//! 2. **User-friendly messages** ([`ErrorContext`]) with a suggestion for the
//!    person running the build
//!
//! # Error Categories
//!
//! - **Amalgamation**: [`HdrgenError::InputNotFound`], [`HdrgenError::IncludeNotFound`],
//!   [`HdrgenError::CircularInclude`], [`HdrgenError::EmptyPrefix`]
//! - **Fetching**: [`HdrgenError::DownloadFailed`]
//! - **Configuration**: [`HdrgenError::ConfigParseError`]
//! - **File System**: [`HdrgenError::FileSystemError`]; plain [`std::io::Error`]s
//!   travel through `anyhow` with context and are recognized by [`user_friendly_error`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use hdrgen_cli::core::{HdrgenError, user_friendly_error};
//!
//! let error = HdrgenError::EmptyPrefix;
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for hdrgen operations
///
/// Every variant carries the paths or names needed to explain the failure
/// without additional context. All failures are fatal: the tools never retry
/// or recover, they report and exit.
#[derive(Error, Debug, Clone)]
pub enum HdrgenError {
    /// The root file handed to the amalgamator does not exist
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The input path as given on the command line or in the config
        path: String,
    },

    /// A matched `#include` directive names a file missing from the include root
    ///
    /// # Fields
    /// - `name`: The include name captured from the directive (e.g. `boost/leaf/config.hpp`)
    /// - `path`: The filesystem path the name resolved to
    #[error("Included file '{name}' not found at {path}")]
    IncludeNotFound {
        /// The include name captured from the directive
        name: String,
        /// The resolved path that does not exist
        path: String,
    },

    /// A header includes itself, directly or through other headers, while
    /// every include is being re-expanded
    #[error("Circular include detected: {chain}")]
    CircularInclude {
        /// The include chain, joined with ` -> `
        chain: String,
    },

    /// The include prefix is missing or empty
    #[error("Include prefix must be a non-empty path (e.g. boost/leaf)")]
    EmptyPrefix,

    /// The include prefix could not be turned into a directive matcher
    #[error("Invalid include prefix '{prefix}': {reason}")]
    InvalidPrefix {
        /// The prefix that was rejected
        prefix: String,
        /// Why the matcher could not be built
        reason: String,
    },

    /// Downloading a pinned dependency failed
    #[error("Failed to download {url}: {reason}")]
    DownloadFailed {
        /// The URL that was requested
        url: String,
        /// Transport error or HTTP status
        reason: String,
    },

    /// The project configuration file could not be parsed
    #[error("Failed to parse config file {file}: {reason}")]
    ConfigParseError {
        /// Path of the config file
        file: String,
        /// Parser message
        reason: String,
    },

    /// A file system operation failed
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The operation being attempted (e.g. "replace output")
        operation: String,
        /// The path involved
        path: String,
    },

    /// Anything that does not fit the categories above
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`HdrgenError`] and adds optional details and a
/// suggestion for resolving it. When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable next step in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use hdrgen_cli::core::{HdrgenError, ErrorContext};
///
/// let context = ErrorContext::new(HdrgenError::EmptyPrefix)
///     .with_suggestion("Pass the include prefix, e.g. `hdrgen amalgamate boost/leaf`")
///     .with_details("Only includes starting with the prefix are inlined");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: HdrgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: HdrgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`HdrgenError`] anywhere in the `anyhow` chain, bare
/// [`std::io::Error`]s and [`toml::de::Error`]s. Anything else is reported with
/// its full cause chain.
///
/// # Examples
///
/// ```rust,no_run
/// use hdrgen_cli::core::user_friendly_error;
/// use std::io::{Error, ErrorKind};
///
/// let io_error = Error::new(ErrorKind::PermissionDenied, "access denied");
/// let context = user_friendly_error(anyhow::Error::from(io_error));
///
/// context.display(); // Shows permission-related suggestions
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(hdrgen_error) = error.chain().find_map(|e| e.downcast_ref::<HdrgenError>()) {
        return create_error_context(hdrgen_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(HdrgenError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions on the output directory")
                .with_details(
                    "hdrgen needs to read the header tree and write next to the output file",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(HdrgenError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(HdrgenError::ConfigParseError {
            file: "hdrgen.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your hdrgen.toml file");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(HdrgenError::Other {
        message,
    })
}

/// Attach tailored suggestions to each known [`HdrgenError`] variant.
fn create_error_context(error: HdrgenError) -> ErrorContext {
    match &error {
        HdrgenError::InputNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the root header with -i/--input or set `amalgamate.input` in hdrgen.toml"),
        HdrgenError::IncludeNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the include path given with -p/--path; include names are resolved against it")
            .with_details("Every #include matching the prefix must exist under the include path"),
        HdrgenError::CircularInclude {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Drop --expand-all to inline each header only once")
            .with_details("Re-expanding every include never terminates when headers include each other"),
        HdrgenError::EmptyPrefix => ErrorContext::new(error)
            .with_suggestion("Pass the include prefix, e.g. `hdrgen amalgamate boost/leaf`"),
        HdrgenError::DownloadFailed {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check your network connection; the download is not retried")
            .with_details("Nothing was written to the destination"),
        HdrgenError::ConfigParseError {
            ..
        } => ErrorContext::new(error).with_suggestion("Check the TOML syntax in your hdrgen.toml file"),
        _ => ErrorContext::new(error),
    }
}
