//! Multi-store operations on the module under the cursor.
//!
//! Each workflow prints a running narrative and records every step, so a
//! partially failed run shows exactly how far it got. Store failures never
//! stop a workflow once it has started mutating.

pub mod backend_destroy;
pub mod module_destroy;
pub mod module_move;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::app::settings::Settings;
use crate::domain::{ActionContext, AppError, ModulePath, S3Backend};
use crate::ports::{LockTable, ObjectStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: String,
    pub outcome: StepOutcome,
}

/// Ordered record of the steps a workflow attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowReport {
    pub steps: Vec<StepReport>,
}

impl WorkflowReport {
    /// Record `result` under `step`, printing failures as they happen.
    pub fn record(&mut self, step: impl Into<String>, result: Result<(), AppError>) {
        let step = step.into();
        let outcome = match result {
            Ok(()) => {
                debug!(step = %step, "workflow step done");
                StepOutcome::Done
            }
            Err(err) => {
                warn!(step = %step, error = %err, "workflow step failed");
                println!("Error: {}: {}", step, err);
                StepOutcome::Failed(err.to_string())
            }
        };
        self.steps.push(StepReport { step, outcome });
    }

    pub fn skip(&mut self, step: impl Into<String>, reason: impl Into<String>) {
        let step = step.into();
        let reason = reason.into();
        println!("Skipping {}: {}", step, reason);
        self.steps.push(StepReport { step, outcome: StepOutcome::Skipped(reason) });
    }

    pub fn failures(&self) -> Vec<&StepReport> {
        self.steps.iter().filter(|s| matches!(s.outcome, StepOutcome::Failed(_))).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failures().is_empty()
    }

    pub fn attempted(&self, step: &str) -> bool {
        self.steps.iter().any(|s| s.step == step)
    }
}

/// Where the cursor goes after a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Preconditions failed; nothing was mutated.
    Aborted(String),
    Moved { destination: ModulePath, report: WorkflowReport },
    /// Module removed; the cursor returns to `parent`.
    Destroyed { parent: PathBuf, report: WorkflowReport },
    BackendDestroyed { report: WorkflowReport },
}

impl WorkflowOutcome {
    pub fn report(&self) -> Option<&WorkflowReport> {
        match self {
            WorkflowOutcome::Aborted(_) => None,
            WorkflowOutcome::Moved { report, .. }
            | WorkflowOutcome::Destroyed { report, .. }
            | WorkflowOutcome::BackendDestroyed { report } => Some(report),
        }
    }
}

pub(crate) const LOCK_STEP: &str = "delete lock entry";
pub(crate) const STATE_STEP: &str = "delete state object";

/// Backend of `context`, or the abort outcome when it is not fully configured.
pub(crate) fn require_backend(context: &ActionContext) -> Result<&S3Backend, WorkflowOutcome> {
    match context.backend.s3() {
        Some(s3) => Ok(s3),
        None => {
            let err = AppError::BackendNotConfigured { module: context.module.to_string() };
            println!("{}. DynamoDB locks and S3 backend are required.", err);
            Err(WorkflowOutcome::Aborted(err.to_string()))
        }
    }
}

pub(crate) fn print_backend(s3: &S3Backend) {
    println!("Using DynamoDB lock table: {}", s3.lock_table());
    println!("Using DynamoDB LockID: {}", s3.lock_id());
    println!("Using S3 path: {}", s3.state_path());
}

pub(crate) fn delete_lock(
    locks: &impl LockTable,
    settings: &Settings,
    s3: &S3Backend,
    report: &mut WorkflowReport,
) {
    if !settings.use_dynamodb_locks {
        report.skip(LOCK_STEP, "DynamoDB locks are disabled");
        return;
    }
    println!("Deleting LockID from DynamoDB...");
    report.record(LOCK_STEP, locks.delete_lock(s3.lock_table(), s3.lock_id()));
}

pub(crate) fn delete_state(objects: &impl ObjectStore, s3: &S3Backend, report: &mut WorkflowReport) {
    println!("Deleting state file on S3...");
    report.record(STATE_STEP, objects.delete_object(s3.bucket(), s3.key()));
}
