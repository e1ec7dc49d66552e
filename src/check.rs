//! Diagnostic tool for vgo.
//!
//! This module implements the `vgo check` command, which checks the system
//! for common issues:
//! - Existence and readability of the installation root.
//! - State of the active symlink.
//! - Installed versions.
//! - Whether the active toolchain is on `PATH`.
//!
//! It reports issues to the user with a pass/fail/warn status.

use anstyle::AnsiColor;

use crate::path_check::check_search_path;
use crate::paths::Paths;
use crate::ui::Ui;
use crate::versions::{LinkStatus, list_versions};

/// Run the check diagnostics
pub fn run_check(paths: &Paths, ui: &Ui) {
    ui.section("vgo Check");
    ui.newline();

    // 1. Check installation root
    check_step(ui, "Installation Root", || {
        if paths.root_dir.is_dir() {
            ui.println(format!(
                "  {} Root directory exists: {}",
                ui.icon_ok(),
                paths.root_dir.display()
            ));
            true
        } else {
            ui.println(format!(
                "  {} Root directory missing: {}",
                ui.icon_err(),
                paths.root_dir.display()
            ));
            false
        }
    });

    // 2. Check active link
    check_step(ui, "Active Symlink", || {
        match LinkStatus::detect(&paths.active_link) {
            LinkStatus::Missing => {
                ui.println(format!(
                    "  {} No active version ({} is missing)",
                    ui.icon_warn(),
                    paths.active_link.display()
                ));
                // Fresh installs have no link yet
                true
            }
            LinkStatus::Active { target, version } => {
                ui.println(format!(
                    "  {} Active version {} -> {}",
                    ui.icon_ok(),
                    version,
                    target.display()
                ));
                if !paths.is_in_root(&target) {
                    ui.println(format!(
                        "  {} Target is outside {}",
                        ui.icon_warn(),
                        paths.root_dir.display()
                    ));
                }
                true
            }
            LinkStatus::Dangling { target } => {
                ui.println(format!(
                    "  {} BROKEN symlink pointing to: {}",
                    ui.icon_err(),
                    target.display()
                ));
                false
            }
            LinkStatus::NotALink => {
                ui.println(format!(
                    "  {} {} is not a symlink",
                    ui.icon_err(),
                    paths.active_link.display()
                ));
                false
            }
        }
    });

    // 3. Check installed versions
    check_step(ui, "Installed Versions", || match list_versions(paths) {
        Ok(versions) if versions.is_empty() => {
            ui.println(format!("  {} No versions installed", ui.icon_warn()));
            true
        }
        Ok(versions) => {
            ui.println(format!(
                "  {} Found {} versions: {}",
                ui.icon_ok(),
                versions.len(),
                versions.join(", ")
            ));
            true
        }
        Err(e) => {
            ui.println(format!("  {} {:#}", ui.icon_err(), e));
            false
        }
    });

    // 4. Environment
    check_step(ui, "Environment", || {
        if check_search_path(paths, ui) {
            ui.println(format!(
                "  {} PATH contains {}",
                ui.icon_ok(),
                paths.active_link.display()
            ));
            true
        } else {
            false
        }
    });
}

fn check_step<F>(ui: &Ui, name: &str, check_fn: F)
where
    F: FnOnce() -> bool,
{
    ui.println(ui.bold(format!("Checking {}...", name)));
    if !check_fn() {
        ui.println(ui.colored("  Issues detected!", AnsiColor::Red));
    }
    ui.newline();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{install_versions, link_active, setup_test_paths};
    use crate::ui::ColorMode;
    use tempfile::TempDir;

    #[test]
    fn test_check_healthy_layout() {
        let temp_dir = TempDir::new().unwrap();
        let paths = setup_test_paths(&temp_dir);
        install_versions(&paths, &["1.21"]);
        link_active(&paths, "1.21");

        // Advisory only; must not panic
        run_check(&paths, &Ui::new(ColorMode::Never, false));
    }

    #[test]
    fn test_check_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::new(temp_dir.path().join("missing"));
        run_check(&paths, &Ui::new(ColorMode::Never, false));
    }
}
