//! Lint-tool adapter with content-hash mutation detection.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use pyforge_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, LintTool, ToolVerdict},
    },
    domain::hook::HookStage,
    error::ForgeResult,
};

/// Runs a gate stage's tool on one file and reports whether the file
/// changed, using SHA-256 digests taken before and after the run.
///
/// Hashing instead of timestamp checks: formatters commonly rewrite a file
/// byte-identically (touching mtime), and a gate that re-stages on every
/// touch would spam notices.
pub struct HashingLintTool {
    runner: Box<dyn CommandRunner>,
    workdir: PathBuf,
}

impl HashingLintTool {
    pub fn new(runner: Box<dyn CommandRunner>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            workdir: workdir.into(),
        }
    }

    fn digest(&self, file: &Path) -> ForgeResult<String> {
        let absolute = self.workdir.join(file);
        let bytes = std::fs::read(&absolute).map_err(|e| ApplicationError::FilesystemError {
            path: absolute.clone(),
            reason: format!("Failed to read for digest: {e}"),
        })?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

impl LintTool for HashingLintTool {
    #[instrument(skip(self), fields(stage = %stage, file = %file.display()))]
    fn apply(&self, stage: HookStage, file: &Path) -> ForgeResult<ToolVerdict> {
        let argv = stage.command(file);
        let args: Vec<&str> = argv[1..].iter().map(String::as_str).collect();

        // The check-only stage cannot mutate; skip the hashing entirely.
        if !stage.mutates() {
            let output = self.runner.run(&argv[0], &args, &self.workdir)?;
            return Ok(ToolVerdict {
                passed: output.success(),
                changed: false,
            });
        }

        let before = self.digest(file)?;
        let output = self.runner.run(&argv[0], &args, &self.workdir)?;
        let after = self.digest(file)?;

        let verdict = ToolVerdict {
            passed: output.success(),
            changed: before != after,
        };
        debug!(passed = verdict.passed, changed = verdict.changed, "Tool applied");
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyforge_core::application::ports::CommandOutput;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Pretends to be a formatter: optionally rewrites the target file
    /// (last argv element) before exiting.
    struct ScriptedTool {
        rewrite_to: Option<String>,
        exit_code: i32,
        workdir: PathBuf,
        calls: Mutex<usize>,
    }

    impl CommandRunner for ScriptedTool {
        fn run(&self, _program: &str, args: &[&str], _cwd: &Path) -> ForgeResult<CommandOutput> {
            *self.calls.lock().unwrap() += 1;
            if let Some(content) = &self.rewrite_to {
                let target = self.workdir.join(args.last().unwrap());
                std::fs::write(target, content).unwrap();
            }
            Ok(CommandOutput {
                code: Some(self.exit_code),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    fn setup(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let file = PathBuf::from("app.py");
        std::fs::write(dir.path().join(&file), content).unwrap();
        (dir, file)
    }

    #[test]
    fn mutation_is_detected() {
        let (dir, file) = setup("import os\n");
        let tool = HashingLintTool::new(
            Box::new(ScriptedTool {
                rewrite_to: Some("\n".into()),
                exit_code: 0,
                workdir: dir.path().to_path_buf(),
                calls: Mutex::new(0),
            }),
            dir.path(),
        );

        let verdict = tool.apply(HookStage::RemoveUnused, &file).unwrap();
        assert!(verdict.passed);
        assert!(verdict.changed);
    }

    #[test]
    fn identical_rewrite_is_not_a_change() {
        let (dir, file) = setup("x = 1\n");
        let tool = HashingLintTool::new(
            Box::new(ScriptedTool {
                rewrite_to: Some("x = 1\n".into()),
                exit_code: 0,
                workdir: dir.path().to_path_buf(),
                calls: Mutex::new(0),
            }),
            dir.path(),
        );

        let verdict = tool.apply(HookStage::Format, &file).unwrap();
        assert!(verdict.passed);
        assert!(!verdict.changed, "byte-identical output must not re-stage");
    }

    #[test]
    fn tool_failure_is_reported_not_raised() {
        let (dir, file) = setup("bad code\n");
        let tool = HashingLintTool::new(
            Box::new(ScriptedTool {
                rewrite_to: None,
                exit_code: 1,
                workdir: dir.path().to_path_buf(),
                calls: Mutex::new(0),
            }),
            dir.path(),
        );

        let verdict = tool.apply(HookStage::StyleCheck, &file).unwrap();
        assert!(!verdict.passed);
        assert!(!verdict.changed);
    }

    #[test]
    fn check_only_stage_never_reports_change() {
        // Even if something rewrites the file during a check-only stage,
        // the gate must not re-stage it on flake8's behalf.
        let (dir, file) = setup("x=1\n");
        let tool = HashingLintTool::new(
            Box::new(ScriptedTool {
                rewrite_to: Some("rewritten\n".into()),
                exit_code: 0,
                workdir: dir.path().to_path_buf(),
                calls: Mutex::new(0),
            }),
            dir.path(),
        );

        let verdict = tool.apply(HookStage::StyleCheck, &file).unwrap();
        assert!(!verdict.changed);
    }

    #[test]
    fn missing_file_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let tool = HashingLintTool::new(
            Box::new(ScriptedTool {
                rewrite_to: None,
                exit_code: 0,
                workdir: dir.path().to_path_buf(),
                calls: Mutex::new(0),
            }),
            dir.path(),
        );

        let err = tool.apply(HookStage::Format, Path::new("ghost.py")).unwrap_err();
        assert!(err.to_string().contains("digest"));
    }
}
