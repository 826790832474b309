//! Implementation of the `pyforge new` command.
//!
//! Responsibility: translate CLI arguments and config defaults into a
//! `ProjectBlueprint`, call the core scaffold service, and display results.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use pyforge_adapters::{LocalFilesystem, SystemRunner};
use pyforge_core::{
    application::ScaffoldService,
    domain::{DependencyManager, ProjectBlueprint, artifacts, FsEntry},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `pyforge new` command.
///
/// Dispatch sequence:
/// 1. Validate the project name and line length
/// 2. Build a `ProjectBlueprint` from flags + config defaults
/// 3. Early-exit if `--dry-run` (print the plan, write nothing)
/// 4. Check for an existing target directory
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. + 2. Blueprint (validation errors surface as user errors here).
    let blueprint = build_blueprint(&args, &config)?;

    debug!(
        line_length = blueprint.line_length(),
        manager = %blueprint.dependency_manager(),
        docker = blueprint.docker(),
        "Blueprint resolved"
    );

    let project_root = args.path.join(blueprint.root_dir_name());

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return describe_plan(&blueprint, &project_root, &output);
    }

    // 4. Check for existing directory.  The service re-checks through its
    //    filesystem port; this early check gives the error before any
    //    adapter is constructed.
    if project_root.exists() && !args.force {
        return Err(CliError::ProjectExists { path: project_root });
    }

    // 5. Create adapters and scaffold
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
    );

    output.header(&format!("Creating '{}'...", blueprint.name()))?;
    info!(project = %blueprint.name(), path = %project_root.display(), "Scaffold started");

    let spinner = output.spinner("Scaffolding project (git, environment, linters)...");
    let result = service.scaffold(&blueprint, &args.path, args.force);
    output.finish_spinner(spinner);
    let created_root = result.map_err(CliError::Core)?;

    info!(project = %blueprint.name(), "Scaffold completed");

    // 6. Success + next steps
    output.success(&format!(
        "Project '{}' created at {}",
        blueprint.name(),
        created_root.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", blueprint.root_dir_name()))?;
        match blueprint.dependency_manager() {
            DependencyManager::Virtualenv => {
                output.print("  source .venv/bin/activate")?;
            }
            DependencyManager::Poetry => {
                output.print("  poetry shell")?;
            }
        }
        output.print("  # Start building!")?;
    }

    Ok(())
}

// ── Blueprint construction ────────────────────────────────────────────────────

/// Fold CLI flags over config-file defaults into a validated blueprint.
///
/// Precedence: flag > config default > built-in default.
fn build_blueprint(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectBlueprint> {
    validate_project_name(&args.name)?;

    let line_length = args.line_length.unwrap_or(config.defaults.line_length);
    if line_length == 0 {
        return Err(CliError::InvalidLineLength { value: line_length });
    }

    let manager = if args.poetry {
        DependencyManager::Poetry
    } else {
        parse_manager(&config.defaults.dependency_manager)?
    };

    ProjectBlueprint::builder(&args.name)
        .line_length(line_length)
        .docker(args.docker || config.defaults.docker)
        .dependency_manager(manager)
        .editor_settings(args.vscode)
        .initial_commit(!args.no_commit)
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    let fail = |reason: &str| {
        Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    };

    if name.is_empty() {
        return fail("name cannot be empty");
    }
    if name.starts_with('.') {
        return fail("name cannot start with '.'");
    }
    if name.contains('/') || name.contains('\\') {
        return fail("name cannot contain path separators");
    }
    // The domain re-validates character classes on build; these checks only
    // exist to fail before any filesystem path is derived from the name.
    Ok(())
}

/// Parse the config file's `defaults.dependency_manager` value.
fn parse_manager(value: &str) -> CliResult<DependencyManager> {
    match value {
        "virtualenv" | "venv" => Ok(DependencyManager::Virtualenv),
        "poetry" => Ok(DependencyManager::Poetry),
        other => Err(CliError::ConfigError {
            message: format!(
                "unknown dependency_manager '{other}' (expected 'virtualenv' or 'poetry')"
            ),
            source: None,
        }),
    }
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn describe_plan(
    blueprint: &ProjectBlueprint,
    project_root: &PathBuf,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = artifacts::plan_project(blueprint, project_root)
        .map_err(|e| CliError::Core(e.into()))?;

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        blueprint.name(),
        project_root.display(),
    ))?;
    output.info(&format!("  Line length:  {}", blueprint.line_length()))?;
    output.info(&format!("  Dependencies: {}", blueprint.dependency_manager()))?;
    output.info(&format!("  Docker:       {}", blueprint.docker()))?;
    output.print("")?;

    for entry in plan.entries() {
        match entry {
            FsEntry::Directory(dir) => output.print(&format!("  {}/", dir.path.display()))?,
            FsEntry::File(file) => output.print(&format!("  {}", file.path.display()))?,
        }
    }

    output.print("")?;
    output.info("No files were written (--dry-run)")?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn new_args(name: &str) -> NewArgs {
        NewArgs {
            path: PathBuf::from("/tmp"),
            name: name.into(),
            docker: false,
            line_length: None,
            poetry: false,
            no_commit: false,
            vscode: false,
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let mut config = AppConfig::default();
        config.defaults.line_length = 100;

        let blueprint = build_blueprint(&new_args("demo"), &config).unwrap();
        assert_eq!(blueprint.line_length(), 100);
        assert_eq!(blueprint.dependency_manager(), DependencyManager::Virtualenv);
    }

    #[test]
    fn flag_overrides_config_default() {
        let mut config = AppConfig::default();
        config.defaults.line_length = 100;

        let mut args = new_args("demo");
        args.line_length = Some(80);

        let blueprint = build_blueprint(&args, &config).unwrap();
        assert_eq!(blueprint.line_length(), 80);
    }

    #[test]
    fn poetry_flag_wins_over_config() {
        let mut args = new_args("demo");
        args.poetry = true;
        let blueprint = build_blueprint(&args, &AppConfig::default()).unwrap();
        assert_eq!(blueprint.dependency_manager(), DependencyManager::Poetry);
    }

    #[test]
    fn no_commit_disables_initial_commit() {
        let mut args = new_args("demo");
        args.no_commit = true;
        let blueprint = build_blueprint(&args, &AppConfig::default()).unwrap();
        assert!(!blueprint.initial_commit());
    }

    #[test]
    fn zero_line_length_is_a_user_error() {
        let mut args = new_args("demo");
        args.line_length = Some(0);
        assert!(matches!(
            build_blueprint(&args, &AppConfig::default()),
            Err(CliError::InvalidLineLength { value: 0 })
        ));
    }

    #[test]
    fn bad_names_rejected_before_path_building() {
        for name in ["", ".hidden", "a/b", "a\\b"] {
            assert!(
                matches!(
                    build_blueprint(&new_args(name), &AppConfig::default()),
                    Err(CliError::InvalidProjectName { .. })
                ),
                "name {name:?} must be rejected"
            );
        }
    }

    #[test]
    fn unknown_manager_in_config_is_a_config_error() {
        let mut config = AppConfig::default();
        config.defaults.dependency_manager = "conda".into();
        assert!(matches!(
            build_blueprint(&new_args("demo"), &config),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn venv_alias_accepted() {
        assert_eq!(parse_manager("venv").unwrap(), DependencyManager::Virtualenv);
    }
}
