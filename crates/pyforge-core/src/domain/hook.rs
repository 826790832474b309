//! The pre-commit gate's stage model.
//!
//! Four stages run in a fixed, non-configurable order over the staged `.py`
//! files. Three of them rewrite files in place; the style checker only
//! reports. The order matters: unused-code removal can delete imports the
//! formatter would otherwise reflow, and the import sorter runs last so it
//! sees the formatter's output.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Source-file suffix the gate operates on.
pub const PYTHON_SUFFIX: &str = ".py";

/// One stage of the pre-commit gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HookStage {
    /// `autoflake` — strips unused imports and variables (mutating).
    RemoveUnused,

    /// `black` — reformats source (mutating).
    Format,

    /// `flake8` — style check (report only, never mutates).
    StyleCheck,

    /// `isort` — orders imports (mutating).
    SortImports,
}

impl HookStage {
    /// All stages, in execution order. Not configurable.
    pub const ORDER: [HookStage; 4] = [
        HookStage::RemoveUnused,
        HookStage::Format,
        HookStage::StyleCheck,
        HookStage::SortImports,
    ];

    /// The external tool this stage shells out to.
    pub fn tool(&self) -> &'static str {
        match self {
            HookStage::RemoveUnused => "autoflake",
            HookStage::Format => "black",
            HookStage::StyleCheck => "flake8",
            HookStage::SortImports => "isort",
        }
    }

    /// Human-readable stage description for notices.
    pub fn title(&self) -> &'static str {
        match self {
            HookStage::RemoveUnused => "unused-code removal",
            HookStage::Format => "formatting",
            HookStage::StyleCheck => "style check",
            HookStage::SortImports => "import sorting",
        }
    }

    /// Whether the stage's tool rewrites files in place.
    pub fn mutates(&self) -> bool {
        !matches!(self, HookStage::StyleCheck)
    }

    /// Full argv for running this stage's tool on a single file.
    ///
    /// Length/ignore configuration is not passed here: the tools read it
    /// from the `pyproject.toml` / `.flake8` the scaffolder emitted.
    pub fn command(&self, file: &Path) -> Vec<String> {
        let file = file.display().to_string();
        match self {
            HookStage::RemoveUnused => vec![
                "autoflake".into(),
                "--in-place".into(),
                "--remove-all-unused-imports".into(),
                "--remove-unused-variables".into(),
                file,
            ],
            HookStage::Format => vec!["black".into(), "--quiet".into(), file],
            HookStage::StyleCheck => vec!["flake8".into(), file],
            HookStage::SortImports => vec!["isort".into(), "--quiet".into(), file],
        }
    }
}

impl std::fmt::Display for HookStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn order_is_remove_format_check_sort() {
        assert_eq!(
            HookStage::ORDER,
            [
                HookStage::RemoveUnused,
                HookStage::Format,
                HookStage::StyleCheck,
                HookStage::SortImports,
            ]
        );
    }

    #[test]
    fn only_style_check_is_read_only() {
        for stage in HookStage::ORDER {
            assert_eq!(stage.mutates(), stage != HookStage::StyleCheck);
        }
    }

    #[test]
    fn command_targets_the_file() {
        let file = PathBuf::from("pkg/app.py");
        for stage in HookStage::ORDER {
            let argv = stage.command(&file);
            assert_eq!(argv[0], stage.tool());
            assert_eq!(argv.last().map(String::as_str), Some("pkg/app.py"));
        }
    }

    #[test]
    fn autoflake_runs_in_place() {
        let argv = HookStage::RemoveUnused.command(Path::new("x.py"));
        assert!(argv.iter().any(|a| a == "--in-place"));
    }
}
