//! Atomic file writes and content-compared replacement.
//!
//! Both helpers stage content in a temporary file created next to the target
//! so the final step is a same-filesystem rename. Readers never observe a
//! partially written file.

use crate::utils::fs::dirs::ensure_parent_dir;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// What [`replace_if_changed`] did to the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// The destination did not exist and was created
    Created,
    /// The destination existed with different content and was replaced
    Updated,
    /// The destination already held identical bytes and was left untouched
    Unchanged,
}

impl fmt::Display for OutputStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        };
        f.write_str(label)
    }
}

/// Creates a temporary file in the directory that will hold `target`.
///
/// The parent directory is created if needed. The file is removed on drop
/// unless it is handed to [`replace_if_changed`] or persisted.
pub fn staging_file_for(target: &Path) -> Result<NamedTempFile> {
    ensure_parent_dir(target)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".hdrgen-").suffix(".tmp");
    // Same mode as a plain `File::create`: 0o666 minus the umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temp file next to {}", target.display()))
}

/// Gives the staged file the permissions of the file it is about to replace.
fn inherit_permissions(staged: &NamedTempFile, target: &Path) -> Result<()> {
    if let Ok(metadata) = fs::metadata(target) {
        fs::set_permissions(staged.path(), metadata.permissions()).with_context(|| {
            format!("Failed to copy permissions of {}", target.display())
        })?;
    }
    Ok(())
}

/// Moves a staged file over `target` only if the bytes differ.
///
/// When `target` already holds identical content the staged file is discarded,
/// so the destination keeps its modification time and build systems watching it
/// see no change.
///
/// # Examples
///
/// ```rust,no_run
/// use hdrgen_cli::utils::fs::{replace_if_changed, staging_file_for, OutputStatus};
/// use std::io::Write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let target = Path::new("test/leaf.hpp");
/// let mut staged = staging_file_for(target)?;
/// staged.write_all(b"// generated\n")?;
/// if replace_if_changed(staged, target)? == OutputStatus::Unchanged {
///     println!("nothing to do");
/// }
/// # Ok(())
/// # }
/// ```
pub fn replace_if_changed(mut staged: NamedTempFile, target: &Path) -> Result<OutputStatus> {
    staged.as_file_mut().flush().context("Failed to flush staged output")?;
    staged.as_file().sync_all().context("Failed to sync staged output to disk")?;

    let status = if !target.exists() {
        OutputStatus::Created
    } else {
        let old = fs::read(target)
            .with_context(|| format!("Failed to read existing output: {}", target.display()))?;
        let new = fs::read(staged.path()).with_context(|| {
            format!("Failed to read staged output: {}", staged.path().display())
        })?;
        if old == new {
            // Dropping the handle deletes the staged file
            return Ok(OutputStatus::Unchanged);
        }
        inherit_permissions(&staged, target)?;
        OutputStatus::Updated
    };

    staged
        .persist(target)
        .with_context(|| format!("Failed to move staged output to {}", target.display()))?;
    Ok(status)
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// Parent directories are created automatically. The file either keeps its old
/// content or holds all of `content`, never a prefix of it.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let mut staged = staging_file_for(path)?;
    staged
        .write_all(content)
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
    staged.as_file().sync_all().context("Failed to sync file to disk")?;
    inherit_permissions(&staged, path)?;
    staged.persist(path).with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;
    Ok(())
}
