//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pyforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: Opaque external command execution
//!   - `StagingArea`: Version-control index queries and re-staging
//!   - `LintTool`: One lint/format tool run on one file
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandOutput, CommandRunner, Filesystem, LintTool, StagingArea, ToolVerdict};
