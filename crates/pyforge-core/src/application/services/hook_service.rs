//! Hook Service - the pre-commit gate.
//!
//! Runs the four lint stages over the staged files. Semantics:
//!
//! - The staged-file list is recomputed before every stage because earlier
//!   stages may have rewritten and re-staged files; the recomputation is the
//!   synchronization barrier between stages.
//! - A file a tool rewrites is re-staged so the committed blob reflects the
//!   tool's output, and a notice is recorded.
//! - A tool failure marks the stage failed but the remaining files of the
//!   stage are still processed (fail-open within a stage).
//! - A failed stage stops the run after it completes: later stages never
//!   execute and the commit is blocked (fail-closed across stages).

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{LintTool, StagingArea},
    domain::hook::{HookStage, PYTHON_SUFFIX},
    error::ForgeResult,
};

/// One file a stage could not process cleanly.
#[derive(Debug, Clone)]
pub struct StageFailure {
    pub stage: HookStage,
    pub file: PathBuf,
    /// The tool's own diagnostic, when the run produced one.
    pub detail: Option<String>,
}

/// Everything that happened during one gate run.
///
/// The run itself returns `Ok(report)` even when the commit must be
/// blocked; only infrastructure failures (the staging area breaking) are
/// `Err`. The caller maps `blocked` to a non-zero exit.
#[derive(Debug, Clone, Default)]
pub struct HookReport {
    /// Files rewritten by a tool and re-staged, with the responsible stage.
    pub restaged: Vec<(HookStage, PathBuf)>,
    /// Per-file failures, in processing order.
    pub failures: Vec<StageFailure>,
    /// The stage that stopped the run, if any.
    pub blocked: Option<HookStage>,
}

impl HookReport {
    pub fn commit_allowed(&self) -> bool {
        self.blocked.is_none()
    }
}

/// The pre-commit gate orchestrator.
pub struct HookService {
    staging: Box<dyn StagingArea>,
    tool: Box<dyn LintTool>,
}

impl HookService {
    /// Create a new hook service with the given adapters.
    pub fn new(staging: Box<dyn StagingArea>, tool: Box<dyn LintTool>) -> Self {
        Self { staging, tool }
    }

    /// Run all stages over the staged Python files.
    #[instrument(skip_all)]
    pub fn run(&self) -> ForgeResult<HookReport> {
        let mut report = HookReport::default();

        for stage in HookStage::ORDER {
            // Recompute: earlier stages may have changed what is staged.
            let files = self.staging.staged_files(PYTHON_SUFFIX)?;
            if files.is_empty() {
                debug!(stage = %stage, "No staged files, skipping stage");
                continue;
            }

            info!(stage = %stage, files = files.len(), "Running stage");
            let mut stage_failed = false;

            for file in &files {
                match self.tool.apply(stage, file) {
                    Ok(verdict) => {
                        if verdict.changed {
                            self.staging.restage(file)?;
                            info!(stage = %stage, file = %file.display(), "Rewritten, re-staged");
                            report.restaged.push((stage, file.clone()));
                        }
                        if !verdict.passed {
                            warn!(stage = %stage, file = %file.display(), "Stage failed for file");
                            stage_failed = true;
                            report.failures.push(StageFailure {
                                stage,
                                file: file.clone(),
                                detail: None,
                            });
                        }
                    }
                    // A tool that cannot run at all counts as a failure for
                    // this file; the rest of the stage still runs.
                    Err(e) => {
                        warn!(stage = %stage, file = %file.display(), error = %e, "Tool error");
                        stage_failed = true;
                        report.failures.push(StageFailure {
                            stage,
                            file: file.clone(),
                            detail: Some(e.to_string()),
                        });
                    }
                }
            }

            if stage_failed {
                warn!(stage = %stage, "Stage failed, blocking commit");
                report.blocked = Some(stage);
                break;
            }
        }

        Ok(report)
    }
}
