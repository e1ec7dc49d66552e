//! Filesystem utility functions
//!
//! Size helpers used when confirming the removal of an installed toolchain.

use std::fs;
use std::path::Path;

/// Recursively calculate the total size of a directory in bytes
///
/// This function walks through all files in a directory tree and sums their sizes.
/// Symbolic links are not followed.
///
/// # Arguments
/// * `path` - The directory path to calculate size for
///
/// # Returns
/// Total size in bytes, or an IO error if directory traversal fails
pub fn dir_size(path: &Path) -> std::io::Result<u64> {
    let mut total = 0;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_file() {
            total += entry.metadata()?.len();
        } else if file_type.is_dir() {
            total += dir_size(&entry.path())?;
        }
    }
    Ok(total)
}

/// Format a byte count for display (`1.50 MB`)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
