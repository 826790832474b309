//! The resolved project configuration.
//!
//! A [`ProjectBlueprint`] is created once from CLI arguments and config-file
//! defaults, validated, and then threaded through every scaffolding step as
//! an immutable value. No step mutates it and nothing reads global state
//! (environment variables, current working directory) behind its back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Default maximum line length baked into generated linter configuration.
pub const DEFAULT_LINE_LENGTH: u32 = 120;

/// How the generated project's dependencies are managed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyManager {
    /// `python3 -m venv` plus pip-installed dev tools.
    #[default]
    Virtualenv,
    /// Poetry-managed project (`poetry install`).
    Poetry,
}

impl DependencyManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Virtualenv => "virtualenv",
            Self::Poetry => "poetry",
        }
    }
}

impl fmt::Display for DependencyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable, validated description of the project to scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBlueprint {
    name: String,
    line_length: u32,
    docker: bool,
    dependency_manager: DependencyManager,
    editor_settings: bool,
    initial_commit: bool,
}

impl ProjectBlueprint {
    /// Start building a blueprint for the given project name.
    pub fn builder(name: impl Into<String>) -> BlueprintBuilder {
        BlueprintBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_length(&self) -> u32 {
        self.line_length
    }

    pub fn docker(&self) -> bool {
        self.docker
    }

    pub fn dependency_manager(&self) -> DependencyManager {
        self.dependency_manager
    }

    pub fn editor_settings(&self) -> bool {
        self.editor_settings
    }

    pub fn initial_commit(&self) -> bool {
        self.initial_commit
    }

    /// Name of the directory the project is created in: `<name>-project`.
    pub fn root_dir_name(&self) -> String {
        format!("{}-project", self.name)
    }

    /// Importable Python package name derived from the project name.
    ///
    /// Hyphens are not valid in Python identifiers, so `my-app` becomes
    /// `my_app`.
    pub fn package_name(&self) -> String {
        self.name.replace('-', "_")
    }

    /// Re-check all invariants.
    ///
    /// The builder already validates, so this only fails for blueprints
    /// deserialized from external input.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        if self.line_length == 0 {
            return Err(DomainError::InvalidLineLength {
                value: self.line_length,
            });
        }
        Ok(())
    }
}

// Display is used in tracing spans; keep it to the fields that identify a run.
impl fmt::Display for ProjectBlueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, line length {})",
            self.name, self.dependency_manager, self.line_length
        )
    }
}

/// Builder for [`ProjectBlueprint`]. Validates on [`BlueprintBuilder::build`].
#[derive(Debug, Clone)]
pub struct BlueprintBuilder {
    name: String,
    line_length: u32,
    docker: bool,
    dependency_manager: DependencyManager,
    editor_settings: bool,
    initial_commit: bool,
}

impl BlueprintBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line_length: DEFAULT_LINE_LENGTH,
            docker: false,
            dependency_manager: DependencyManager::default(),
            editor_settings: false,
            initial_commit: true,
        }
    }

    pub fn line_length(mut self, line_length: u32) -> Self {
        self.line_length = line_length;
        self
    }

    pub fn docker(mut self, docker: bool) -> Self {
        self.docker = docker;
        self
    }

    pub fn dependency_manager(mut self, manager: DependencyManager) -> Self {
        self.dependency_manager = manager;
        self
    }

    pub fn editor_settings(mut self, editor_settings: bool) -> Self {
        self.editor_settings = editor_settings;
        self
    }

    pub fn initial_commit(mut self, initial_commit: bool) -> Self {
        self.initial_commit = initial_commit;
        self
    }

    pub fn build(self) -> Result<ProjectBlueprint, DomainError> {
        let blueprint = ProjectBlueprint {
            name: self.name,
            line_length: self.line_length,
            docker: self.docker,
            dependency_manager: self.dependency_manager,
            editor_settings: self.editor_settings,
            initial_commit: self.initial_commit,
        };
        blueprint.validate()?;
        Ok(blueprint)
    }
}

/// Project name rules: non-empty, no leading dot, no path separators,
/// ASCII alphanumerics plus `-`/`_`, starts with a letter or digit.
fn validate_name(name: &str) -> Result<(), DomainError> {
    let fail = |reason: &str| {
        Err(DomainError::InvalidProjectName {
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
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return fail("only ASCII letters, digits, '-' and '_' are allowed");
    }
    // First char checked after the charset so the message stays specific.
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return fail("name must start with a letter or digit");
    }
    Ok(())
}
