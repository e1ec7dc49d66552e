use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use vgo::{
    commands,
    error::exit_code_for,
    paths::{DEFAULT_ROOT, Paths},
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "vgo")]
#[command(about = "Go Version Switcher - activate one of several installed Go toolchains")]
#[command(version)]
struct Cli {
    /// Directory holding one go<version> directory per installed toolchain
    #[arg(long, global = true, env = "VGO_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// When to use colors
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Log debug details to stderr (overridden by VGO_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the active go version
    Set {
        /// Version to activate (e.g. 1.21)
        version: String,
    },

    /// List the installed go versions
    List {
        /// Print the versions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active go version
    Current,

    /// Delete an installed go version
    Delete {
        /// Version to delete
        version: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Run diagnostics on the installation root, active link and PATH
    Check,

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "vgo=debug" } else { "vgo=warn" };
    let env_filter =
        EnvFilter::try_from_env("VGO_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli, ui: &Ui) -> Result<()> {
    let paths = Paths::new(cli.root);
    tracing::debug!(root = %paths.root_dir.display(), "resolved installation root");

    match cli.command {
        Commands::Set { version } => commands::set(&paths, &version, ui),
        Commands::List { json } => commands::list(&paths, ui, json),
        Commands::Current => commands::current(&paths, ui),
        Commands::Delete { version, yes } => commands::delete(&paths, &version, yes, ui),
        Commands::Check => commands::check(&paths, ui),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "vgo", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ui = Ui::new(cli.color, cli.no_color);

    match run(cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.err(format!("{e:#}"));
            ExitCode::from(exit_code_for(&e))
        }
    }
}
