//! Python packaging and linter configuration artifacts.
//!
//! Two flavours of `pyproject.toml` exist (PEP 621 for virtualenv projects,
//! Poetry tables for Poetry projects); both end with the same linter
//! configuration block. `line_length` appears in exactly two sections —
//! formatter and import sorter — and the style checker ignores E501 so line
//! length is enforced in one place only.

use crate::domain::entities::blueprint::{DependencyManager, ProjectBlueprint};

/// Development tools installed into every generated project, in install
/// order. `flake8-tidy-imports` backs the banned-modules table.
pub const DEV_TOOLS: [&str; 5] = [
    "autoflake",
    "black",
    "flake8",
    "flake8-tidy-imports",
    "isort",
];

/// Minimum Python the generated project declares.
const PYTHON_REQUIRES: &str = "3.11";

/// Build the full `pyproject.toml` for the blueprint's dependency manager.
pub fn pyproject(blueprint: &ProjectBlueprint) -> String {
    let manifest = match blueprint.dependency_manager() {
        DependencyManager::Virtualenv => pep621_manifest(blueprint),
        DependencyManager::Poetry => poetry_manifest(blueprint),
    };
    format!("{manifest}\n{}", lint_sections(blueprint.line_length()))
}

fn pep621_manifest(blueprint: &ProjectBlueprint) -> String {
    let dev_list = DEV_TOOLS
        .iter()
        .map(|tool| format!("    \"{tool}\","))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\
[project]
name = \"{name}\"
version = \"0.1.0\"
description = \"{name}\"
requires-python = \">={python}\"

[project.optional-dependencies]
dev = [
{dev_list}
]
",
        name = blueprint.name(),
        python = PYTHON_REQUIRES,
    )
}

fn poetry_manifest(blueprint: &ProjectBlueprint) -> String {
    let dev_deps = DEV_TOOLS
        .iter()
        .map(|tool| format!("{tool} = \"*\""))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\
[tool.poetry]
name = \"{name}\"
version = \"0.1.0\"
description = \"{name}\"
authors = []
packages = [{{ include = \"{package}\" }}]

[tool.poetry.dependencies]
python = \"^{python}\"

[tool.poetry.group.dev.dependencies]
{dev_deps}

[build-system]
requires = [\"poetry-core\"]
build-backend = \"poetry.core.masonry.api\"
",
        name = blueprint.name(),
        package = blueprint.package_name(),
        python = PYTHON_REQUIRES,
    )
}

/// Linter configuration appended to every manifest.
///
/// Black normalises hyphens to underscores when reading `pyproject.toml`,
/// so `line_length` is valid for both black and isort.
fn lint_sections(line_length: u32) -> String {
    format!(
        "\
[tool.autoflake]
in-place = true
remove-all-unused-imports = true
remove-unused-variables = true

[tool.black]
line_length = {line_length}

[tool.isort]
profile = \"black\"
line_length = {line_length}
"
    )
}

/// The style checker's configuration file (`.flake8`).
///
/// flake8 does not read `pyproject.toml`, so its section lives in its own
/// INI file: a fixed ignore list (E501 stays with the formatter, E203/W503
/// conflict with black) and a fixed banned-modules table.
pub fn flake8_config() -> String {
    "\
[flake8]
extend-ignore = E203, W503, E501
exclude = .git,.venv,__pycache__,build,dist
ban-relative-imports = parents
banned-modules =
    mock = use unittest.mock
    pytz = use zoneinfo
    typing.Text = use str
"
    .to_string()
}
