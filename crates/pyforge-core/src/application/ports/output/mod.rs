//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pyforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::hook::HookStage;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyforge_adapters::filesystem::LocalFilesystem` (production)
/// - `pyforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Permissions are capability-based, not Unix-specific; the executable
///   bit is set directly at creation time, never via privilege escalation.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Set or clear the executable permission.
    fn set_permissions(&self, path: &Path, executable: bool) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// Captured result of one external command run.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit status code; `None` when the process died to a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for invoking external tools (git, python3, pip, poetry).
///
/// Commands are opaque to the application: it builds argv, the adapter
/// executes and captures. No shell is involved.
///
/// Implemented by:
/// - `pyforge_adapters::process::SystemRunner` (production)
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, capturing output.
    ///
    /// Returns `Err` only when the process cannot be started; a non-zero
    /// exit is a normal `Ok` with `success() == false` so callers decide
    /// how to react.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ForgeResult<CommandOutput>;
}

/// Port for the version-control staging area (the index).
///
/// Implemented by:
/// - `pyforge_adapters::git::GitStagingArea` (production)
pub trait StagingArea: Send + Sync {
    /// Paths currently staged for commit, excluding deletions, filtered to
    /// the given file suffix. Order is whatever the index reports.
    ///
    /// Callers re-query before every gate stage: earlier stages may have
    /// mutated and re-staged files.
    fn staged_files(&self, suffix: &str) -> ForgeResult<Vec<PathBuf>>;

    /// Add a file back to the index after a tool rewrote it.
    fn restage(&self, path: &Path) -> ForgeResult<()>;
}

/// What a single tool run did to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolVerdict {
    /// Tool exited zero.
    pub passed: bool,
    /// File content differs from before the run.
    pub changed: bool,
}

/// Port for running one gate stage's tool on one file.
///
/// The narrow "run tool, report changed-or-not" surface keeps mutation
/// detection (content hashing) out of the gate algorithm, so tests can
/// script verdicts without processes or files.
///
/// Implemented by:
/// - `pyforge_adapters::lint::HashingLintTool` (production)
pub trait LintTool: Send + Sync {
    fn apply(&self, stage: HookStage, file: &Path) -> ForgeResult<ToolVerdict>;
}
