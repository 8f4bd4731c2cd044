//! hdrgen CLI entry point
//!
//! Parses the command line, runs the selected command and turns any failure
//! into a single user-friendly error message with exit status 1.
//!
//! - `amalgamate` - Inline a tree of headers into one distributable header
//! - `fetch` - Download the pinned nlohmann/json header if missing

use anyhow::Result;
use clap::Parser;
use hdrgen_cli::cli;
use hdrgen_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
