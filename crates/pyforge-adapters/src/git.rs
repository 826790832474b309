//! Git staging-area adapter.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use pyforge_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, StagingArea},
    },
    error::ForgeResult,
};

/// The git index, driven through the porcelain CLI.
///
/// Staged files are listed with `git diff --cached --name-only
/// --diff-filter=d`: the `d` filter drops files the commit deletes, which
/// must never be handed to a lint tool.
pub struct GitStagingArea {
    runner: Box<dyn CommandRunner>,
    workdir: PathBuf,
}

impl GitStagingArea {
    pub fn new(runner: Box<dyn CommandRunner>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            workdir: workdir.into(),
        }
    }

    fn git(&self, args: &[&str]) -> ForgeResult<String> {
        let output = self.runner.run("git", args, &self.workdir)?;
        if !output.success() {
            return Err(ApplicationError::StagingError {
                reason: format!(
                    "git {} failed: {}",
                    args.first().copied().unwrap_or_default(),
                    output.stderr.trim()
                ),
            }
            .into());
        }
        Ok(output.stdout)
    }
}

impl StagingArea for GitStagingArea {
    #[instrument(skip(self))]
    fn staged_files(&self, suffix: &str) -> ForgeResult<Vec<PathBuf>> {
        let stdout = self.git(&["diff", "--cached", "--name-only", "--diff-filter=d"])?;
        let files = parse_staged(&stdout, suffix);
        debug!(count = files.len(), "Staged files listed");
        Ok(files)
    }

    fn restage(&self, path: &Path) -> ForgeResult<()> {
        let rendered = path.display().to_string();
        self.git(&["add", "--", &rendered])?;
        Ok(())
    }
}

/// Parse `--name-only` output, preserving git's order, keeping only paths
/// with the wanted suffix.
fn parse_staged(stdout: &str, suffix: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.ends_with(suffix))
        .map(PathBuf::from)
        .collect()
}
