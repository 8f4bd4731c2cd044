//! Ensure the pinned nlohmann/json header is present.
//!
//! ```bash
//! hdrgen fetch
//! hdrgen fetch --dest third_party/json.hpp
//! ```

use super::RunContext;
use crate::config::resolve_path;
use crate::constants::{PINNED_DEPENDENCY_DEST, PINNED_DEPENDENCY_URL};
use crate::fetch::{FetchOutcome, Fetcher};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Download the pinned single header unless it already exists.
#[derive(Args, Debug, Clone, Default)]
pub struct FetchCommand {
    /// Override the download URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the destination file
    #[arg(long = "dest", value_name = "FILE")]
    pub destination: Option<PathBuf>,
}

impl FetchCommand {
    pub async fn execute(self, ctx: &RunContext) -> Result<()> {
        let fetcher = self.fetcher(ctx);
        let outcome = fetcher.ensure_present().await?;

        if !ctx.quiet {
            match outcome {
                FetchOutcome::AlreadyPresent => println!(
                    "{} already exists, skipping download",
                    fetcher.destination().display()
                ),
                FetchOutcome::Downloaded {
                    bytes,
                } => println!(
                    "{} Saved to {} ({} bytes)",
                    "✓".green(),
                    fetcher.destination().display().to_string().bold(),
                    bytes
                ),
            }
        }
        Ok(())
    }

    /// Build the fetcher from flags, then `[fetch]`, then the pinned defaults.
    pub fn fetcher(&self, ctx: &RunContext) -> Fetcher {
        let section = &ctx.config.fetch;
        let url = self
            .url
            .clone()
            .or_else(|| section.url.clone())
            .unwrap_or_else(|| PINNED_DEPENDENCY_URL.to_string());
        let destination = match (&self.destination, &section.destination) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => resolve_path(&ctx.project_dir, path),
            (None, None) => ctx.project_dir.join(PINNED_DEPENDENCY_DEST),
        };
        Fetcher::new(url, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use std::path::Path;

    fn context(config: ProjectConfig) -> RunContext {
        RunContext {
            project_dir: PathBuf::from("/project"),
            config,
            quiet: true,
        }
    }

    #[test]
    fn test_pinned_defaults() {
        let fetcher = FetchCommand::default().fetcher(&context(ProjectConfig::default()));
        assert_eq!(fetcher.url(), PINNED_DEPENDENCY_URL);
        assert_eq!(fetcher.destination(), Path::new("/project/test/nlohmann/json.hpp"));
    }

    #[test]
    fn test_config_then_flags() {
        let mut config = ProjectConfig::default();
        config.fetch.url = Some("https://mirror.example.com/json.hpp".to_string());
        config.fetch.destination = Some(PathBuf::from("third_party/json.hpp"));
        let ctx = context(config);

        let fetcher = FetchCommand::default().fetcher(&ctx);
        assert_eq!(fetcher.url(), "https://mirror.example.com/json.hpp");
        assert_eq!(fetcher.destination(), Path::new("/project/third_party/json.hpp"));

        let cmd = FetchCommand {
            url: Some("http://localhost/json.hpp".to_string()),
            destination: Some(PathBuf::from("json.hpp")),
        };
        let fetcher = cmd.fetcher(&ctx);
        assert_eq!(fetcher.url(), "http://localhost/json.hpp");
        assert_eq!(fetcher.destination(), Path::new("json.hpp"));
    }
}
