//! Pinned dependency download.
//!
//! The test suite of the library depends on a single external header
//! (nlohmann/json). [`Fetcher`] makes sure a copy exists at a fixed location:
//! when the file is already there nothing happens, otherwise it is downloaded
//! once. There is no retry and no checksum verification. A failed download
//! leaves nothing behind because the body is written atomically.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hdrgen_cli::fetch::{FetchOutcome, Fetcher};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let fetcher = Fetcher::pinned(std::path::Path::new("."));
//! match fetcher.ensure_present().await? {
//!     FetchOutcome::AlreadyPresent => println!("already there"),
//!     FetchOutcome::Downloaded { bytes } => println!("downloaded {bytes} bytes"),
//! }
//! # Ok(())
//! # }
//! ```

use crate::constants::{PINNED_DEPENDENCY_DEST, PINNED_DEPENDENCY_URL};
use crate::core::HdrgenError;
use crate::utils::fs::{atomic_write, ensure_parent_dir};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What [`Fetcher::ensure_present`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The destination existed; no request was made
    AlreadyPresent,
    /// The resource was downloaded and written
    Downloaded {
        /// Size of the body written to disk
        bytes: usize,
    },
}

/// Downloads one URL to one destination unless the destination exists.
#[derive(Debug, Clone)]
pub struct Fetcher {
    url: String,
    destination: PathBuf,
}

impl Fetcher {
    pub fn new(url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            destination: destination.into(),
        }
    }

    /// The pinned nlohmann/json release, placed under `project_dir`.
    pub fn pinned(project_dir: &Path) -> Self {
        Self::new(PINNED_DEPENDENCY_URL, project_dir.join(PINNED_DEPENDENCY_DEST))
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Download the resource unless the destination already exists.
    ///
    /// # Errors
    ///
    /// [`HdrgenError::DownloadFailed`] for transport errors and non-success
    /// HTTP statuses; I/O errors when the destination cannot be written.
    pub async fn ensure_present(&self) -> Result<FetchOutcome> {
        if self.destination.exists() {
            debug!("{} exists, skipping download", self.destination.display());
            return Ok(FetchOutcome::AlreadyPresent);
        }

        ensure_parent_dir(&self.destination)?;
        info!("Downloading {}", self.url);

        let body = self.download().await?;
        atomic_write(&self.destination, &body)?;

        info!("Saved {} bytes to {}", body.len(), self.destination.display());
        Ok(FetchOutcome::Downloaded {
            bytes: body.len(),
        })
    }

    async fn download(&self) -> Result<Vec<u8>, HdrgenError> {
        let failed = |reason: String| HdrgenError::DownloadFailed {
            url: self.url.clone(),
            reason,
        };

        let response = reqwest::get(&self.url).await.map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("HTTP {status}")));
        }

        let body = response.bytes().await.map_err(|e| failed(e.to_string()))?;
        Ok(body.to_vec())
    }
}
