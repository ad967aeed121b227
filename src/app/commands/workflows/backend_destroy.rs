use super::{WorkflowOutcome, WorkflowReport, delete_lock, delete_state, print_backend, require_backend};
use crate::app::context::AppContext;
use crate::domain::ActionContext;
use crate::ports::{CommandRunner, LockTable, ObjectStore, VersionControl};

/// Remove the lock entry and state object of a module whose resources were
/// already destroyed elsewhere. Files and resources are not touched.
pub fn execute<R, O, L, V>(app: &AppContext<R, O, L, V>, context: &ActionContext) -> WorkflowOutcome
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    let s3 = match require_backend(context) {
        Ok(s3) => s3,
        Err(aborted) => return aborted,
    };
    print_backend(s3);
    let mut report = WorkflowReport::default();
    delete_lock(app.locks(), app.settings(), s3, &mut report);
    delete_state(app.objects(), s3, &mut report);
    WorkflowOutcome::BackendDestroyed { report }
}
