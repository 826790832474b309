//! Implementation of `pyforge hook` — the pre-commit gate.
//!
//! `run` is what the emitted `.githooks/pre-commit` shim executes; a
//! non-zero exit from here is what actually blocks the commit. `install`
//! retrofits the gate into an existing repository.

use std::path::PathBuf;

use tracing::{info, instrument};

use pyforge_adapters::{GitStagingArea, HashingLintTool, LocalFilesystem, SystemRunner};
use pyforge_core::{
    application::{HookReport, HookService, ports::Filesystem},
    domain::artifacts::git,
};

use crate::{
    cli::{HookCommands, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct hook subcommand.
pub fn execute(cmd: HookCommands, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match cmd {
        HookCommands::Run => run(global, output),
        HookCommands::Install { force } => install(force, output),
    }
}

// ── hook run ──────────────────────────────────────────────────────────────────

/// Run the four-stage gate over the staged files of the repository in the
/// current working directory (git runs hooks from the repo root).
#[instrument(skip_all)]
fn run(_global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let workdir = std::env::current_dir()?;

    let service = HookService::new(
        Box::new(GitStagingArea::new(
            Box::new(SystemRunner::new()),
            workdir.clone(),
        )),
        Box::new(HashingLintTool::new(
            Box::new(SystemRunner::new()),
            workdir,
        )),
    );

    let report = service.run().map_err(CliError::Core)?;
    render_report(&report, &output)?;

    match report.blocked {
        None => {
            output.success("Pre-commit checks passed")?;
            Ok(())
        }
        Some(stage) => Err(CliError::CommitBlocked {
            stage: stage.tool().to_string(),
            failures: report.failures.len(),
        }),
    }
}

fn render_report(report: &HookReport, output: &OutputManager) -> CliResult<()> {
    for (stage, file) in &report.restaged {
        output.info(&format!(
            "{} rewrote {}; re-staged",
            stage.tool(),
            file.display()
        ))?;
    }

    for failure in &report.failures {
        let mut line = format!("{} failed for {}", failure.stage.tool(), failure.file.display());
        if let Some(detail) = &failure.detail {
            line.push_str(&format!(" ({detail})"));
        }
        output.error(&line)?;
    }

    Ok(())
}

// ── hook install ──────────────────────────────────────────────────────────────

/// Write the hook shim into `.githooks/` of the current repository and
/// point `core.hooksPath` at it.
#[instrument(skip_all)]
fn install(force: bool, output: OutputManager) -> CliResult<()> {
    use pyforge_core::application::ports::CommandRunner;

    let workdir = std::env::current_dir()?;
    let hook_path: PathBuf = workdir.join(git::HOOKS_DIR).join(git::PRE_COMMIT_HOOK);

    if hook_path.exists() && !force {
        return Err(CliError::HookExists { path: hook_path });
    }

    let filesystem = LocalFilesystem::new();
    filesystem
        .create_dir_all(&workdir.join(git::HOOKS_DIR))
        .map_err(CliError::Core)?;
    filesystem
        .write_file(&hook_path, &git::pre_commit_shim())
        .map_err(CliError::Core)?;
    filesystem
        .set_permissions(&hook_path, true)
        .map_err(CliError::Core)?;

    let runner = SystemRunner::new();
    let config = runner
        .run(
            "git",
            &["config", "core.hooksPath", git::HOOKS_DIR],
            &workdir,
        )
        .map_err(CliError::Core)?;
    if !config.success() {
        return Err(CliError::Core(
            pyforge_core::application::ApplicationError::CommandFailed {
                command: "git config core.hooksPath".into(),
                code: config.code,
                stderr: config.stderr,
            }
            .into(),
        ));
    }

    info!(path = %hook_path.display(), "Hook installed");
    output.success(&format!("Pre-commit gate installed at {}", hook_path.display()))?;
    Ok(())
}
