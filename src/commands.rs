//! High-level command orchestration for the CLI.
//!
//! This module contains the handler functions for each CLI command (`set`,
//! `list`, `current`, `delete`, `check`). It serves as the coordination layer,
//! interacting with:
//! - `crate::ui` for user interaction (output, prompts).
//! - `crate::paths` for filesystem locations.
//! - `crate::versions` for installed version discovery.
//! - `crate::switch` for activating a version.
//! - `crate::path_check` for the `PATH` advisory.
//!
//! Each function here generally corresponds to a subcommand in `main.rs`.

use anstyle::AnsiColor;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::check::run_check;
use crate::error::VgoError;
use crate::fs_utils::{dir_size, format_bytes};
use crate::path_check::check_search_path;
use crate::paths::Paths;
use crate::switch::{report_version, set_version};
use crate::ui::Ui;
use crate::versions::{InstalledVersion, LinkStatus, active_version, list_installed};

/// Activate an installed version
pub fn set(paths: &Paths, version: &str, ui: &Ui) -> Result<()> {
    check_search_path(paths, ui);

    let target = set_version(paths, version)?;
    ui.ok(format!(
        "Active go version: {} ({})",
        version,
        ui.dim(target.display().to_string())
    ));
    report_version();
    Ok(())
}

/// One entry of `vgo list --json`
#[derive(Serialize)]
struct VersionRow<'a> {
    #[serde(flatten)]
    installed: &'a InstalledVersion,
    active: bool,
}

/// List all installed versions
pub fn list(paths: &Paths, ui: &Ui, json: bool) -> Result<()> {
    let installed = list_installed(paths)?;
    let active = active_version(paths);

    if json {
        let rows: Vec<_> = installed
            .iter()
            .map(|v| VersionRow {
                active: active.as_deref() == Some(v.version.as_str()),
                installed: v,
            })
            .collect();
        let out = serde_json::to_string_pretty(&rows).context("Failed to serialize versions")?;
        ui.println(out);
        return Ok(());
    }

    if installed.is_empty() {
        ui.warn(format!(
            "No go versions found in {}",
            paths.root_dir.display()
        ));
        return Ok(());
    }

    let mut table = ui.simple_table();
    table.set_header(vec![
        ui.header_cell(""),
        ui.header_cell("Version"),
        ui.header_cell("Installed"),
        ui.header_cell("Status"),
    ]);

    for v in &installed {
        let is_active = active.as_deref() == Some(v.version.as_str());
        let icon = if is_active { ui.icon_ok() } else { " " };
        let version_cell = if is_active {
            ui.header_cell(&v.version)
        } else {
            ui.cell(&v.version)
        };
        let status_cell = if is_active {
            ui.colored_cell("active", AnsiColor::Green)
        } else {
            ui.cell("-")
        };
        let installed_at = v
            .installed_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "?".to_string());

        table.add_row(vec![
            ui.cell(icon),
            version_cell,
            ui.cell(installed_at),
            status_cell,
        ]);
    }

    ui.section("Versions");
    ui.println(table.to_string());

    Ok(())
}

/// Show the active version and the state of the active symlink
pub fn current(paths: &Paths, ui: &Ui) -> Result<()> {
    ui.section("Current Version");
    ui.newline();

    let mut table = ui.simple_table();
    let status = LinkStatus::detect(&paths.active_link);
    match &status {
        LinkStatus::Missing => {
            table.add_row(vec![ui.cell("Active version:"), ui.cell("(none)")]);
        }
        LinkStatus::Active { target, version } => {
            table.add_row(vec![
                ui.cell("Active version:"),
                ui.colored_cell(version, AnsiColor::Green),
            ]);
            table.add_row(vec![
                ui.cell("Symlink:"),
                ui.cell(format!(
                    "{} → {}",
                    paths.active_link.display(),
                    target.display()
                )),
            ]);
        }
        LinkStatus::Dangling { target } => {
            table.add_row(vec![ui.cell("Active version:"), ui.cell("(none)")]);
            table.add_row(vec![
                ui.cell("Symlink:"),
                ui.colored_cell(
                    format!("broken symlink → {}", target.display()),
                    AnsiColor::Red,
                ),
            ]);
        }
        LinkStatus::NotALink => {
            table.add_row(vec![ui.cell("Active version:"), ui.cell("(none)")]);
            table.add_row(vec![
                ui.cell("Symlink:"),
                ui.colored_cell(
                    format!("{} is not a symlink", paths.active_link.display()),
                    AnsiColor::Yellow,
                ),
            ]);
        }
    }

    ui.println(table.to_string());

    if matches!(status, LinkStatus::Missing | LinkStatus::Dangling { .. }) {
        ui.newline();
        ui.println("Activate one with:");
        ui.println(format!("  {} set <version>", ui.bold("vgo")));
    }
    Ok(())
}

/// Delete an installed version directory
pub fn delete(paths: &Paths, version: &str, assume_yes: bool, ui: &Ui) -> Result<()> {
    if active_version(paths).as_deref() == Some(version) {
        return Err(VgoError::ActiveVersion(version.to_string()).into());
    }

    let installed = list_installed(paths)?;
    // Remove the directory the listing found; it may lack the go prefix
    let found = installed
        .iter()
        .find(|v| v.version == version)
        .map(|v| v.path.clone());
    let Some(dir) = found else {
        return Err(VgoError::UnknownVersion {
            requested: version.to_string(),
            available: installed.into_iter().map(|v| v.version).collect(),
        }
        .into());
    };

    // Confirm unless --yes
    if !assume_yes {
        let size = dir_size(&dir)
            .with_context(|| format!("Failed to calculate size for {}", dir.display()))?;
        let confirm = inquire::Confirm::new(&format!(
            "Delete go {} ({}, {})?",
            version,
            dir.display(),
            format_bytes(size)
        ))
        .with_default(false)
        .with_help_message("This permanently removes the toolchain directory")
        .prompt()
        .context("Confirmation cancelled (pass --yes to skip the prompt)")?;

        if !confirm {
            ui.warn("Deletion cancelled.");
            return Ok(());
        }
    }

    let spinner = ui.spinner(format!("Removing {}...", dir.display()));
    tracing::debug!(dir = %dir.display(), "removing version directory");
    match fs::remove_dir_all(&dir) {
        Ok(()) => {
            ui.spinner_finish_ok(&spinner, format!("Deleted go {}", version));
            Ok(())
        }
        Err(e) => {
            ui.spinner_finish_err(&spinner, format!("Failed to delete go {}", version));
            Err(e).with_context(|| format!("Failed to delete directory: {}", dir.display()))
        }
    }
}

/// Run diagnostics on the vgo setup
pub fn check(paths: &Paths, ui: &Ui) -> Result<()> {
    run_check(paths, ui);
    Ok(())
}
