//! `PATH` validation.
//!
//! The check is a plain substring match of the active link path against the
//! raw `PATH` value. It does not split `PATH` into entries, so a directory such
//! as `/usr/local/go/active-old/bin` also satisfies it.

use std::ffi::OsStr;
use std::path::Path;

use crate::paths::Paths;
use crate::ui::Ui;

/// Whether the raw search path mentions the active link
pub fn search_path_contains(search_path: &OsStr, link: &Path) -> bool {
    search_path
        .to_string_lossy()
        .contains(link.to_string_lossy().as_ref())
}

/// Shell lines that put the active toolchain on `PATH`
pub fn remediation(paths: &Paths) -> String {
    format!(
        "\texport GO_BIN=\"{}\"\n\texport PATH=\"${{PATH}}:${{GO_BIN}}\"",
        paths.active_bin.display()
    )
}

/// Build the warning for a given `PATH` value, or `None` when it is fine
pub fn path_hint(paths: &Paths, search_path: Option<&OsStr>) -> Option<String> {
    let present = search_path.is_some_and(|p| search_path_contains(p, &paths.active_link));
    if present {
        return None;
    }

    let rc_file = crate::paths::shell_rc_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "~/.zshrc".to_string());
    Some(format!(
        "go path is not set in PATH. Add the following to {} file\n{}",
        rc_file,
        remediation(paths)
    ))
}

/// Check the process `PATH` and print remediation when the active link is missing.
///
/// Advisory only; returns whether the check passed so `check` can report it.
pub fn check_search_path(paths: &Paths, ui: &Ui) -> bool {
    let search_path = std::env::var_os("PATH");
    match path_hint(paths, search_path.as_deref()) {
        Some(hint) => {
            tracing::debug!(link = %paths.active_link.display(), "active link not on PATH");
            ui.warn(hint);
            false
        }
        None => true,
    }
}
