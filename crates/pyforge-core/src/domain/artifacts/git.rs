//! Version-control artifacts: ignore list and the pre-commit hook shim.

/// Directory (inside the project) that `core.hooksPath` points at.
///
/// Hooks live in a tracked directory rather than `.git/hooks` so the gate
/// survives clones.
pub const HOOKS_DIR: &str = ".githooks";

/// Hook file name git invokes before finalizing a commit.
pub const PRE_COMMIT_HOOK: &str = "pre-commit";

/// Static ignore list for generated Python projects.
pub fn gitignore() -> String {
    "\
# Byte-compiled / cached
__pycache__/
*.py[cod]
*.egg-info/
.pytest_cache/
.mypy_cache/

# Environments
.venv/
venv/
.env

# Build artifacts
build/
dist/

# Editors
.idea/
*.swp
"
    .to_string()
}

/// The emitted pre-commit hook.
///
/// The gate logic itself lives in the `pyforge` binary so it can be unit
/// tested; the hook file is only a shim that executes it from the
/// repository root.
pub fn pre_commit_shim() -> String {
    "\
#!/bin/sh
# Installed by pyforge. Runs the staged-file lint gate before each commit.
exec pyforge hook run
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gitignore_covers_virtualenv_and_caches() {
        let content = gitignore();
        assert!(content.contains(".venv/"));
        assert!(content.contains("__pycache__/"));
        assert!(content.contains("*.egg-info/"));
    }

    #[test]
    fn shim_is_a_shell_script() {
        let shim = pre_commit_shim();
        assert!(shim.starts_with("#!/bin/sh\n"));
        assert!(shim.contains("pyforge hook run"));
    }
}
