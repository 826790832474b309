//! Core domain layer for pyforge.
//!
//! This module contains pure business logic with no I/O: the project
//! blueprint, the artifact builders, the project plan, and the hook stage
//! model. Filesystem, process, and version-control concerns are reached via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Blueprint and plan are built once, then read

// Public API - what the world sees
pub mod artifacts;
pub mod entities;
pub mod error;
pub mod hook;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    blueprint::{BlueprintBuilder, DEFAULT_LINE_LENGTH, DependencyManager, ProjectBlueprint},
    common::Permissions,
    project_plan::{DirectoryToCreate, FileToWrite, FsEntry, ProjectPlan},
};

pub use error::DomainError;

pub use hook::{HookStage, PYTHON_SUFFIX};

pub use validation::DomainValidator;
