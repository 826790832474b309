//! Application services: use case orchestration.

pub mod hook_service;
pub mod scaffold_service;

pub use hook_service::{HookReport, HookService, StageFailure};
pub use scaffold_service::{INITIAL_COMMIT_MESSAGE, ScaffoldService};
