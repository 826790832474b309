//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the blueprint and check the target is free
//! 2. Plan and materialize the directory tree
//! 3. Provision the Python environment (virtualenv or Poetry)
//! 4. Initialize the repository, wire the hook path, make the first commit
//!
//! Failure handling is fail-fast: the first failing external tool aborts the
//! run and the partially created directory is left for the caller to remove
//! (the error's suggestions name the cleanup).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::{
        DependencyManager, DomainValidator, ProjectBlueprint, ProjectPlan, artifacts,
        artifacts::{git, python},
    },
    error::{ForgeError, ForgeResult},
};

/// Commit message for the scaffolded repository's first commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial project setup";

/// Path of pip inside the created virtual environment.
#[cfg(not(windows))]
const VENV_PIP: &str = ".venv/bin/pip";
#[cfg(windows)]
const VENV_PIP: &str = ".venv/Scripts/pip";

/// Main scaffolding service.
///
/// Orchestrates planning, materialization, environment provisioning, and
/// repository initialization through injected adapters.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Scaffold a new project under `parent`.
    ///
    /// This is the main use case. Returns the created project root.
    #[instrument(skip_all, fields(project = %blueprint.name(), parent = %parent.display()))]
    pub fn scaffold(
        &self,
        blueprint: &ProjectBlueprint,
        parent: &Path,
        force: bool,
    ) -> ForgeResult<PathBuf> {
        DomainValidator::validate_blueprint(blueprint).map_err(ForgeError::Domain)?;

        let root = parent.join(blueprint.root_dir_name());

        if self.filesystem.exists(&root) {
            if !force {
                return Err(ApplicationError::ProjectExists { path: root }.into());
            }
            info!(path = %root.display(), "Removing existing directory (--force)");
            self.filesystem.remove_dir_all(&root)?;
        }

        let plan = artifacts::plan_project(blueprint, &root).map_err(ForgeError::Domain)?;
        info!(entries = plan.entry_count(), "Project plan assembled");

        self.materialize(&plan)?;
        self.provision_environment(blueprint, &root)?;
        self.initialize_repository(blueprint, &root)?;

        info!("Scaffold completed successfully");
        Ok(root)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write the plan to disk: root, directories, files, permission bits.
    fn materialize(&self, plan: &ProjectPlan) -> ForgeResult<()> {
        let root = plan.root();
        self.filesystem.create_dir_all(root)?;

        for dir in plan.directories() {
            self.filesystem.create_dir_all(&root.join(&dir.path))?;
        }

        for file in plan.files() {
            let path = root.join(&file.path);
            self.filesystem.write_file(&path, &file.content)?;
            if file.permissions.executable() {
                self.filesystem.set_permissions(&path, true)?;
            }
        }

        debug!(root = %root.display(), "Plan materialized");
        Ok(())
    }

    /// Create the virtual environment and install dev tools, or run a
    /// Poetry install against the emitted manifest.
    fn provision_environment(
        &self,
        blueprint: &ProjectBlueprint,
        root: &Path,
    ) -> ForgeResult<()> {
        match blueprint.dependency_manager() {
            DependencyManager::Virtualenv => {
                info!("Creating virtual environment");
                self.run_checked("python3", &["-m", "venv", ".venv"], root)?;

                info!("Installing development tools");
                let mut args = vec!["install"];
                args.extend(python::DEV_TOOLS);
                self.run_checked(VENV_PIP, &args, root)?;
            }
            DependencyManager::Poetry => {
                info!("Installing dependencies with poetry");
                self.run_checked("poetry", &["install"], root)?;
            }
        }
        Ok(())
    }

    /// `git init`, point hooks at the tracked hooks directory, and (unless
    /// disabled) stage everything and make the initial commit.
    fn initialize_repository(
        &self,
        blueprint: &ProjectBlueprint,
        root: &Path,
    ) -> ForgeResult<()> {
        info!("Initializing git repository");
        self.run_checked("git", &["init"], root)?;
        self.run_checked(
            "git",
            &["config", "core.hooksPath", git::HOOKS_DIR],
            root,
        )?;

        if !blueprint.initial_commit() {
            debug!("Skipping initial commit (--no-commit)");
            return Ok(());
        }

        self.run_checked("git", &["add", "."], root)?;
        self.run_checked("git", &["commit", "-m", INITIAL_COMMIT_MESSAGE], root)?;
        info!("Initial commit created");
        Ok(())
    }

    /// Run a command and translate a non-zero exit into an error.
    fn run_checked(&self, program: &str, args: &[&str], cwd: &Path) -> ForgeResult<()> {
        let output = self.runner.run(program, args, cwd)?;
        if output.success() {
            return Ok(());
        }
        Err(ApplicationError::CommandFailed {
            command: format!("{program} {}", args.join(" ")),
            code: output.code,
            stderr: output.stderr,
        }
        .into())
    }
}
