//! Installed version discovery.
//!
//! Every call reads the installation root fresh; nothing is cached between
//! invocations. This module also inspects the active symlink so commands can
//! tell which installed version is currently selected.

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::VgoError;
use crate::paths::{ACTIVE_ENTRY, Paths, version_from_dir_name};

/// A version directory found under the installation root
#[derive(Debug, Clone, Serialize)]
pub struct InstalledVersion {
    pub version: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<DateTime<Local>>,
}

/// List installed versions with their directories
pub fn list_installed(paths: &Paths) -> Result<Vec<InstalledVersion>> {
    let entries = fs::read_dir(&paths.root_dir).map_err(|source| VgoError::ListVersions {
        path: paths.root_dir.clone(),
        source,
    })?;

    let mut installed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| VgoError::ListVersions {
            path: paths.root_dir.clone(),
            source,
        })?;

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!(entry = ?entry.file_name(), "skipping non UTF-8 entry");
            continue;
        };
        if name == ACTIVE_ENTRY {
            continue;
        }
        // file_type() does not follow symlinks, so the active link and any
        // staging link are never reported as versions.
        if !entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }

        let installed_at = entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);

        installed.push(InstalledVersion {
            version: version_from_dir_name(&name).to_string(),
            path: entry.path(),
            installed_at,
        });
    }

    installed.sort_by(|a, b| compare_versions(&a.version, &b.version));
    tracing::debug!(root = %paths.root_dir.display(), count = installed.len(), "listed versions");
    Ok(installed)
}

/// List available version identifiers
pub fn list_versions(paths: &Paths) -> Result<Vec<String>> {
    Ok(list_installed(paths)?
        .into_iter()
        .map(|v| v.version)
        .collect())
}

/// Order version identifiers by their dot-separated numeric components,
/// so `1.9` sorts before `1.10`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = component_key(l).cmp(&component_key(r));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn component_key(component: &str) -> (Option<u64>, &str) {
    let digits = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    let number = component[..digits].parse().ok();
    (number, &component[digits..])
}

/// Represents the state of the active symlink
#[derive(Debug, PartialEq, Eq)]
pub enum LinkStatus {
    /// No active version selected
    Missing,
    /// Symlink pointing at an existing directory
    Active { target: PathBuf, version: String },
    /// Symlink whose target no longer exists
    Dangling { target: PathBuf },
    /// Something other than a symlink occupies the active path
    NotALink,
}

impl LinkStatus {
    pub fn detect(path: &Path) -> Self {
        // Use symlink_metadata to check if it's a symlink without following it
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => match fs::read_link(path) {
                Ok(target) if path.exists() => {
                    let version = target
                        .file_name()
                        .and_then(|n| n.to_str())
                        .map(|n| version_from_dir_name(n).to_string())
                        .unwrap_or_default();
                    Self::Active { target, version }
                }
                Ok(target) => Self::Dangling { target },
                Err(_) => Self::Dangling {
                    target: PathBuf::from("?"),
                },
            },
            Ok(_) => Self::NotALink,
            Err(_) => Self::Missing,
        }
    }

    /// Version identifier of the active toolchain, if one is active
    pub fn active_version(&self) -> Option<&str> {
        match self {
            Self::Active { version, .. } => Some(version),
            _ => None,
        }
    }
}

/// Detect the active version from the active symlink
pub fn active_version(paths: &Paths) -> Option<String> {
    LinkStatus::detect(&paths.active_link)
        .active_version()
        .map(str::to_string)
}
