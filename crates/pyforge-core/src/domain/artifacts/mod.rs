//! Artifact builders: one pure function per generated file.
//!
//! Every builder takes the blueprint and returns content; nothing here
//! touches the filesystem or depends on write order. [`plan_project`]
//! assembles the builders' output into a validated [`ProjectPlan`].

use std::path::Path;

use crate::domain::{
    entities::{
        blueprint::ProjectBlueprint,
        common::Permissions,
        project_plan::ProjectPlan,
    },
    error::DomainError,
};

pub mod docker;
pub mod editor;
pub mod git;
pub mod python;

/// Assemble the complete set of directories and files for a blueprint.
///
/// `root` is the project root directory (`<parent>/<name>-project`); entry
/// paths inside the plan are relative to it.
pub fn plan_project(
    blueprint: &ProjectBlueprint,
    root: impl AsRef<Path>,
) -> Result<ProjectPlan, DomainError> {
    let package = blueprint.package_name();
    let mut plan = ProjectPlan::new(root.as_ref());

    // Package skeleton
    plan.add_directory(&package);
    plan.add_file(format!("{package}/__init__.py"), "");
    plan.add_directory("tests");
    plan.add_file("tests/__init__.py", "");

    // Top-level files
    plan.add_file("README.md", readme(blueprint));
    plan.add_file(".gitignore", git::gitignore());
    plan.add_file("pyproject.toml", python::pyproject(blueprint));
    plan.add_file(".flake8", python::flake8_config());

    // Pre-commit gate
    plan.add_directory(git::HOOKS_DIR);
    plan.add_file_with(
        format!("{}/{}", git::HOOKS_DIR, git::PRE_COMMIT_HOOK),
        git::pre_commit_shim(),
        Permissions::script(),
    );

    if blueprint.editor_settings() {
        plan.add_directory(".vscode");
        plan.add_file(".vscode/settings.json", editor::vscode_settings(blueprint));
    }

    if blueprint.docker() {
        plan.add_file("Dockerfile", docker::dockerfile(blueprint));
        plan.add_file_with("entrypoint.sh", docker::entrypoint(blueprint), Permissions::script());
        plan.add_file("docker-compose.yml", docker::compose(blueprint));
        plan.add_file(".dockerignore", docker::dockerignore());
    }

    plan.validate()?;
    Ok(plan)
}

fn readme(blueprint: &ProjectBlueprint) -> String {
    format!(
        "\
# {name}

## Development

```sh
{activate}
```

Lint and formatting run automatically on every commit via the pre-commit
gate in `.githooks/`.
",
        name = blueprint.name(),
        activate = match blueprint.dependency_manager() {
            crate::domain::entities::blueprint::DependencyManager::Virtualenv =>
                "source .venv/bin/activate",
            crate::domain::entities::blueprint::DependencyManager::Poetry => "poetry shell",
        },
    )
}
