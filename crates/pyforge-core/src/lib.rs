//! pyforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pyforge
//! Python-project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          pyforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, HookService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, CommandRunner,    │
//! │      StagingArea, LintTool)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pyforge-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemRunner, GitCli) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectBlueprint, artifacts, HookStage)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pyforge_core::{
//!     application::ScaffoldService,
//!     domain::ProjectBlueprint,
//! };
//!
//! // 1. Describe the project
//! let blueprint = ProjectBlueprint::builder("demo")
//!     .line_length(120)
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, runner);
//! service.scaffold(&blueprint, "/tmp".as_ref(), false).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        HookReport, HookService, ScaffoldService,
        ports::{CommandOutput, CommandRunner, Filesystem, LintTool, StagingArea, ToolVerdict},
    };
    pub use crate::domain::{
        BlueprintBuilder, DependencyManager, HookStage, Permissions, ProjectBlueprint, ProjectPlan,
    };
    pub use crate::error::{ErrorCategory, ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
