//! Version switching logic.
//!
//! This module implements the core mechanism of `vgo`: re-pointing the active
//! symlink at an installed toolchain. It handles:
//! - Validating the requested version against the installed ones.
//! - Swapping the active symlink through a staging link and a rename.
//! - The missing-target failure, which leaves no active version behind.
//! - Running `go version` to confirm the switch.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::VgoError;
use crate::paths::{Paths, TOOL_BINARY};
use crate::versions::{LinkStatus, list_versions};

/// Switch the active symlink to `version`, validating against a fresh listing.
///
/// Returns the directory the active link now points to.
pub fn set_version(paths: &Paths, version: &str) -> Result<PathBuf> {
    let available = list_versions(paths)?;
    activate(paths, version, &available)
}

/// Switch the active symlink using an already computed list of versions.
///
/// A version can be listed yet have no directory on disk when the listing is
/// stale. In that case the current link is removed and `MissingTarget` is
/// returned: no version is active afterwards.
pub fn activate(paths: &Paths, version: &str, available: &[String]) -> Result<PathBuf> {
    if !available.iter().any(|v| v == version) {
        return Err(VgoError::UnknownVersion {
            requested: version.to_string(),
            available: available.to_vec(),
        }
        .into());
    }

    let target = paths.version_dir(version);
    if !target.exists() {
        // Only a symlink is ours to remove; anything else at the active
        // path is left alone.
        if matches!(
            LinkStatus::detect(&paths.active_link),
            LinkStatus::Active { .. } | LinkStatus::Dangling { .. }
        ) {
            remove_active_link(paths)?;
        }
        return Err(VgoError::MissingTarget { path: target }.into());
    }

    replace_link(&target, &paths.active_link, &paths.staging_link())?;
    tracing::debug!(
        link = %paths.active_link.display(),
        target = %target.display(),
        "active version switched"
    );
    Ok(target)
}

/// Remove the active symlink
pub fn remove_active_link(paths: &Paths) -> Result<()> {
    tracing::debug!(link = %paths.active_link.display(), "removing active link");
    fs::remove_file(&paths.active_link).with_context(|| {
        format!(
            "Failed to remove active link: {}",
            paths.active_link.display()
        )
    })
}

/// Point `link` at `target` without a window where `link` is absent.
///
/// The new link is created at `staging` first and then renamed over `link`.
fn replace_link(target: &Path, link: &Path, staging: &Path) -> Result<()> {
    // Leftover from an interrupted run
    if fs::symlink_metadata(staging).is_ok() {
        fs::remove_file(staging)
            .with_context(|| format!("Failed to remove stale link: {}", staging.display()))?;
    }

    make_symlink(target, staging)?;

    if let Err(e) = fs::rename(staging, link) {
        let _ = fs::remove_file(staging);
        return Err(e).with_context(|| {
            format!(
                "Failed to replace {} with link to {}",
                link.display(),
                target.display()
            )
        });
    }

    Ok(())
}

fn make_symlink(target: &Path, link: &Path) -> Result<()> {
    #[cfg(unix)]
    std::os::unix::fs::symlink(target, link).with_context(|| {
        format!(
            "Failed to create symlink from {} to {}",
            link.display(),
            target.display()
        )
    })?;

    #[cfg(windows)]
    std::os::windows::fs::symlink_dir(target, link).with_context(|| {
        format!(
            "Failed to create symlink from {} to {}",
            link.display(),
            target.display()
        )
    })?;

    Ok(())
}

/// Run `go version` so the user sees which toolchain is now on `PATH`.
///
/// Output goes straight to the inherited stdout/stderr. The exit status is
/// not checked and a spawn failure is only logged.
pub fn report_version() {
    match Command::new(TOOL_BINARY).arg("version").status() {
        Ok(status) => tracing::debug!(%status, "{TOOL_BINARY} version finished"),
        Err(e) => tracing::debug!(error = %e, "failed to run {TOOL_BINARY} version"),
    }
}
