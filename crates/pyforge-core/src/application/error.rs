//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// An external command could not be started at all.
    #[error("Could not launch '{command}': {reason}")]
    CommandLaunchFailed { command: String, reason: String },

    /// An external command ran and reported failure.
    #[error("Command '{command}' failed{}", exit_code_suffix(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The version-control index could not be queried or updated.
    #[error("Staging area error: {reason}")]
    StagingError { reason: String },
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
                format!("Or remove it yourself: rm -rf {}", path.display()),
            ],
            Self::CommandLaunchFailed { command, .. } => vec![
                format!("'{}' could not be started", command),
                "Ensure the tool is installed and in your PATH".into(),
            ],
            Self::CommandFailed { command, stderr, .. } => {
                let mut suggestions = vec![format!("'{}' reported failure", command)];
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    suggestions.push(format!("Tool output: {}", stderr));
                }
                suggestions.push("The partially created project is left in place".into());
                suggestions
            }
            Self::StagingError { .. } => vec![
                "Is this a git repository?".into(),
                "Run the hook from the repository root".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::CommandLaunchFailed { .. } | Self::CommandFailed { .. } => {
                ErrorCategory::External
            }
            Self::StagingError { .. } => ErrorCategory::External,
        }
    }
}
