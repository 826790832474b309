//! Shared in-memory fakes for service tests.

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pyforge_core::application::ports::{
    CommandOutput, CommandRunner, Filesystem, LintTool, StagingArea, ToolVerdict,
};
use pyforge_core::application::ApplicationError;
use pyforge_core::domain::HookStage;
use pyforge_core::error::ForgeResult;

// ── Filesystem ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

/// In-memory filesystem fake with inspection helpers.
#[derive(Default)]
pub struct FakeFilesystem {
    inner: Mutex<FakeFilesystemInner>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-create a directory so existence checks see it.
    pub fn seed_directory(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().directories.insert(path.into());
    }

    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.lock().unwrap().files.get(path).cloned()
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner.lock().unwrap().executables.contains(path)
    }

    pub fn file_count(&self) -> usize {
        self.inner.lock().unwrap().files.len()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> ForgeResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.directories.retain(|p| !p.starts_with(path));
        inner.executables.retain(|p| !p.starts_with(path));
        Ok(())
    }
}

// ── Command runner ────────────────────────────────────────────────────────────

/// Records every invocation as a rendered command line; optionally fails
/// any command containing a configured substring.
#[derive(Default)]
pub struct FakeRunner {
    log: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(substring: impl Into<String>) -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            fail_on: Some(substring.into()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> ForgeResult<CommandOutput> {
        let rendered = format!("{program} {}", args.join(" "));
        self.log.lock().unwrap().push(rendered.clone());

        let failed = self
            .fail_on
            .as_ref()
            .is_some_and(|needle| rendered.contains(needle.as_str()));

        Ok(CommandOutput {
            code: Some(if failed { 1 } else { 0 }),
            stdout: String::new(),
            stderr: if failed { "simulated failure".into() } else { String::new() },
        })
    }
}

// ── Staging area ──────────────────────────────────────────────────────────────

/// Fixed staged-file list; records re-stages and how often the list was
/// queried.
#[derive(Default)]
pub struct FakeStaging {
    staged: Vec<PathBuf>,
    restaged: Mutex<Vec<PathBuf>>,
    queries: Mutex<usize>,
}

impl FakeStaging {
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            staged: files.iter().map(PathBuf::from).collect(),
            ..Self::default()
        }
    }

    pub fn restaged(&self) -> Vec<PathBuf> {
        self.restaged.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        *self.queries.lock().unwrap()
    }
}

impl StagingArea for FakeStaging {
    fn staged_files(&self, suffix: &str) -> ForgeResult<Vec<PathBuf>> {
        *self.queries.lock().unwrap() += 1;
        Ok(self
            .staged
            .iter()
            .filter(|p| p.to_string_lossy().ends_with(suffix))
            .cloned()
            .collect())
    }

    fn restage(&self, path: &Path) -> ForgeResult<()> {
        self.restaged.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

// ── Lint tool ─────────────────────────────────────────────────────────────────

/// Scripted verdicts per (stage, file); everything unscripted passes
/// unchanged. Records invocations in order.
#[derive(Default)]
pub struct FakeTool {
    verdicts: HashMap<(HookStage, PathBuf), ToolVerdict>,
    errors: HashSet<(HookStage, PathBuf)>,
    invocations: Mutex<Vec<(HookStage, PathBuf)>>,
}

impl FakeTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verdict(mut self, stage: HookStage, file: &str, passed: bool, changed: bool) -> Self {
        self.verdicts
            .insert((stage, PathBuf::from(file)), ToolVerdict { passed, changed });
        self
    }

    pub fn erroring(mut self, stage: HookStage, file: &str) -> Self {
        self.errors.insert((stage, PathBuf::from(file)));
        self
    }

    pub fn invocations(&self) -> Vec<(HookStage, PathBuf)> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn stages_seen(&self) -> HashSet<HookStage> {
        self.invocations().into_iter().map(|(s, _)| s).collect()
    }
}

impl LintTool for FakeTool {
    fn apply(&self, stage: HookStage, file: &Path) -> ForgeResult<ToolVerdict> {
        let key = (stage, file.to_path_buf());
        self.invocations.lock().unwrap().push(key.clone());

        if self.errors.contains(&key) {
            return Err(ApplicationError::CommandLaunchFailed {
                command: stage.tool().into(),
                reason: "simulated missing tool".into(),
            }
            .into());
        }

        Ok(self
            .verdicts
            .get(&key)
            .copied()
            .unwrap_or(ToolVerdict {
                passed: true,
                changed: false,
            }))
    }
}
