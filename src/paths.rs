use anyhow::{Context, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Default installation root for Go toolchains
pub const DEFAULT_ROOT: &str = "/usr/local/go";

/// Prefix of every installed version directory (`go1.21`)
pub const VERSION_PREFIX: &str = "go";

/// Reserved entry under the root holding the active symlink
pub const ACTIVE_ENTRY: &str = "active";

/// Toolchain binary used to confirm a switch
pub const TOOL_BINARY: &str = "go";

/// All computed paths used by vgo
#[derive(Debug, Clone)]
pub struct Paths {
    /// /usr/local/go
    pub root_dir: PathBuf,
    /// /usr/local/go/active
    pub active_link: PathBuf,
    /// /usr/local/go/active/bin
    pub active_bin: PathBuf,
}

impl Paths {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        let active_link = root_dir.join(ACTIVE_ENTRY);
        let active_bin = active_link.join("bin");

        Self {
            root_dir,
            active_link,
            active_bin,
        }
    }

    /// Get the directory of an installed version: `<root>/go<version>`
    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.root_dir.join(format!("{VERSION_PREFIX}{version}"))
    }

    /// Temporary link location used to swap the active link atomically
    pub fn staging_link(&self) -> PathBuf {
        self.root_dir
            .join(format!(".{ACTIVE_ENTRY}.{}.tmp", std::process::id()))
    }

    /// Check if a path is within the installation root
    pub fn is_in_root(&self, path: &Path) -> bool {
        path.starts_with(&self.root_dir)
    }
}

/// Shell rc file the remediation hint tells the user to edit
pub fn shell_rc_file() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
    let rc = match std::env::var("SHELL") {
        Ok(shell) if shell.ends_with("bash") => ".bashrc",
        _ => ".zshrc",
    };
    Ok(base_dirs.home_dir().join(rc))
}

/// Strip the version prefix from a directory name, if present
pub fn version_from_dir_name(name: &str) -> &str {
    name.strip_prefix(VERSION_PREFIX).unwrap_or(name)
}
