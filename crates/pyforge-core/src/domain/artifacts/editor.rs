//! Editor settings artifact (`.vscode/settings.json`).

use serde_json::json;

use crate::domain::entities::blueprint::ProjectBlueprint;

/// VS Code workspace settings: interpreter and tool paths inside the
/// project's virtual environment, plus a ruler at the configured line
/// length.
pub fn vscode_settings(blueprint: &ProjectBlueprint) -> String {
    let settings = json!({
        "python.defaultInterpreterPath": ".venv/bin/python",
        "python.terminal.activateEnvironment": true,
        "black-formatter.path": [".venv/bin/black"],
        "flake8.path": [".venv/bin/flake8"],
        "isort.path": [".venv/bin/isort"],
        "editor.formatOnSave": true,
        "editor.rulers": [blueprint.line_length()],
    });

    // json! output is deterministic (serde_json preserves insertion order),
    // so the emitted file is stable across runs.
    let mut rendered = serde_json::to_string_pretty(&settings)
        .unwrap_or_else(|_| "{}".to_string());
    rendered.push('\n');
    rendered
}
