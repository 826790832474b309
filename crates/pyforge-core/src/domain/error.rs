//! Domain-layer errors: blueprint and plan validation failures.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for aggregation in reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid line length {value}: must be a positive integer")]
    InvalidLineLength { value: u32 },

    #[error("Duplicate path in project plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in project plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Project plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBlueprint(msg) => vec![
                "Check your project configuration".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Start with a letter or number".into(),
                "Examples: my-service, my_app, demo123".into(),
            ],
            Self::InvalidLineLength { value } => vec![
                format!("'{}' is not a usable line length", value),
                "Pass a positive integer, e.g. --line-length 100".into(),
            ],
            Self::DuplicatePath { path } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("Offending path: {}", path),
                "This is a bug in the artifact planner, please report it".into(),
            ],
            Self::EmptyPlan => vec!["This is a bug in the artifact planner, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBlueprint(_)
            | Self::InvalidProjectName { .. }
            | Self::InvalidLineLength { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyPlan => {
                ErrorCategory::Internal
            }
        }
    }
}
