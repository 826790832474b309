//! Application layer for pyforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, HookService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{HookReport, HookService, INITIAL_COMMIT_MESSAGE, ScaffoldService, StageFailure};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandOutput, CommandRunner, Filesystem, LintTool, StagingArea, ToolVerdict};

pub use error::ApplicationError;
