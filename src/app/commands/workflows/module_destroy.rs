use std::fs;
use std::path::Path;

use super::{WorkflowOutcome, WorkflowReport, delete_lock, delete_state, print_backend, require_backend};
use crate::app::context::AppContext;
use crate::domain::invocation::run_argv;
use crate::domain::{ActionContext, AppError};
use crate::ports::{CommandRunner, LockTable, ObjectStore, VersionControl};

pub const DESTROY_STEP: &str = "destroy resources";
pub const REMOVE_DIR_STEP: &str = "remove module directory";

/// Directories inside a module that hold only tool scratch data.
const SCRATCH_DIRS: [&str; 2] = [".terragrunt-cache", ".terraform"];

/// Tear down the module's resources, its backend bookkeeping, and its directory.
///
/// All four steps run even when an earlier one fails.
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
    let module_dir = context.module.absolute();

    println!("Destroying resources...");
    let argv = run_argv(&app.settings().tool, &["destroy".to_string()], &module_dir, &context.versions);
    let result = app.runner().run(&argv, false);
    let destroyed = if result.success() {
        Ok(())
    } else {
        let details = match result.exit_code {
            Some(code) => format!("exit code {}: {}", code, result.stderr.trim()),
            None => result.stderr.trim().to_string(),
        };
        Err(AppError::external(&app.settings().tool, details))
    };
    report.record(DESTROY_STEP, destroyed);

    delete_lock(app.locks(), app.settings(), s3, &mut report);
    delete_state(app.objects(), s3, &mut report);

    println!("Deleting module folder...");
    report.record(REMOVE_DIR_STEP, remove_module_dir(&module_dir));

    WorkflowOutcome::Destroyed { parent: context.module.parent_dir(), report }
}

/// Remove the tool scratch directories, then the module directory itself.
///
/// Sources and nested modules are never deleted; if any remain, the final
/// removal fails and the directory is left behind.
fn remove_module_dir(dir: &Path) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if entry.file_type()?.is_dir() && SCRATCH_DIRS.iter().any(|scratch| name == *scratch) {
            fs::remove_dir_all(entry.path())?;
        }
    }
    fs::remove_dir(dir)?;
    Ok(())
}
