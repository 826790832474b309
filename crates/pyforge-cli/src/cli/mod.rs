//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyforge",
    bin_name = "pyforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f527} Python project scaffolding with a pre-commit lint gate",
    long_about = "pyforge creates a ready-to-commit Python project: package \
                  skeleton, git repository, linter configuration, and a \
                  pre-commit gate that keeps staged files clean.",
    after_help = "EXAMPLES:\n\
        \x20 pyforge new . demo\n\
        \x20 pyforge new /tmp demo --line-length 80 --docker\n\
        \x20 pyforge new ~/src api --poetry --no-commit\n\
        \x20 pyforge completions bash > /usr/share/bash-completion/completions/pyforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new Python project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 pyforge new . demo\n\
            \x20 pyforge new /tmp demo -l 80 --vscode\n\
            \x20 pyforge new ~/src api --poetry --docker"
    )]
    New(NewArgs),

    /// Run or install the pre-commit gate.
    #[command(
        about = "Pre-commit gate",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyforge hook run      # invoked by the emitted git hook\n\
            \x20 pyforge hook install  # wire the gate into an existing repo"
    )]
    Hook(HookCommands),

    /// Initialise a pyforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pyforge init            # default location\n\
            \x20 pyforge init --force    # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyforge completions bash > ~/.local/share/bash-completion/completions/pyforge\n\
            \x20 pyforge completions zsh  > ~/.zfunc/_pyforge\n\
            \x20 pyforge completions fish > ~/.config/fish/completions/pyforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the pyforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyforge config get defaults.line_length\n\
            \x20 pyforge config set defaults.dependency_manager poetry\n\
            \x20 pyforge config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `pyforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory the project is created under.
    #[arg(value_name = "PATH", help = "Parent directory for the project")]
    pub path: PathBuf,

    /// Project name; the project lands in `<PATH>/<NAME>-project`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Emit a Docker development setup.
    #[arg(short = 'd', long = "docker", help = "Generate Docker artifacts")]
    pub docker: bool,

    /// Maximum line length baked into the linter configuration.
    #[arg(
        short = 'l',
        long = "line-length",
        value_name = "N",
        help = "Line length for formatter and import sorter (default: 120)"
    )]
    pub line_length: Option<u32>,

    /// Manage dependencies with Poetry instead of a virtual environment.
    #[arg(short = 'p', long = "poetry", help = "Use Poetry instead of venv")]
    pub poetry: bool,

    /// Skip the initial commit (repository is still initialised).
    #[arg(short = 'n', long = "no-commit", help = "Skip the initial commit")]
    pub no_commit: bool,

    /// Write VS Code workspace settings.
    #[arg(long = "vscode", help = "Generate .vscode/settings.json")]
    pub vscode: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── hook ──────────────────────────────────────────────────────────────────────

/// Subcommands for `pyforge hook`.
#[derive(Debug, Subcommand)]
pub enum HookCommands {
    /// Run the gate over the staged files (what the git hook executes).
    Run,
    /// Install the hook shim and hooks-path config into an existing repo.
    Install {
        /// Overwrite an existing hook file.
        #[arg(long = "force", help = "Overwrite existing hook")]
        force: bool,
    },
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pyforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.line_length`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
