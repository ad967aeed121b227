use std::fs;
use std::io;
use std::path::{Component, Path};

use tracing::debug;

use super::{WorkflowOutcome, WorkflowReport, delete_lock, print_backend, require_backend};
use crate::app::context::AppContext;
use crate::domain::{ActionContext, AppError, ModulePath};
use crate::ports::{CommandRunner, LockTable, ObjectStore, VersionControl};

pub const CREATE_STEP: &str = "create destination directory";
pub const RELOCATE_STEP: &str = "relocate state objects";

/// Move the module under the cursor to `destination` (relative to the base
/// directory), relocating its remote state alongside the files.
pub fn execute<R, O, L, V>(
    app: &AppContext<R, O, L, V>,
    context: &ActionContext,
    destination: &str,
) -> WorkflowOutcome
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
    let source = &context.module;
    let destination = match validate_destination(source, destination) {
        Ok(destination) => destination,
        Err(reason) => {
            println!("{}", reason);
            return WorkflowOutcome::Aborted(reason);
        }
    };

    let destination_key = s3.relocated_key(&source.key_fragment(), &destination.key_fragment());
    print_backend(s3);
    println!("Using S3 destination path: s3://{}/{}", s3.bucket(), destination_key);

    let mut report = WorkflowReport::default();

    println!("Moving source files...");
    if let Err(err) = fs::create_dir_all(destination.absolute()) {
        let reason = format!("Could not create {}: {}", destination.absolute().display(), err);
        println!("Error: {}", reason);
        return WorkflowOutcome::Aborted(reason);
    }
    report.record(CREATE_STEP, Ok(()));
    move_files(&source.absolute(), &destination.absolute(), &mut report);

    delete_lock(app.locks(), app.settings(), s3, &mut report);

    println!("Moving state files on S3...");
    if destination_key == s3.key() {
        report.skip(
            RELOCATE_STEP,
            format!("state key '{}' does not contain the module path '{}'", s3.key(), source),
        );
    } else {
        relocate_objects(app.objects(), s3.bucket(), s3.key(), &destination_key, &mut report);
    }

    println!("Adding moved files to git...");
    for path in [destination.absolute(), source.absolute()] {
        if let Err(err) = app.vcs().stage(&path) {
            debug!(path = %path.display(), error = %err, "staging skipped");
        }
    }

    WorkflowOutcome::Moved { destination, report }
}

fn validate_destination(source: &ModulePath, raw: &str) -> Result<ModulePath, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Destination path is empty; nothing was moved.".to_string());
    }
    let path = Path::new(raw);
    if path.is_absolute() || path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(format!("Destination '{}' must be a path inside the base directory.", raw));
    }
    let destination = ModulePath::unchecked(source.base(), path);
    if destination.relative().as_os_str().is_empty() || destination.relative() == source.relative() {
        return Err(format!("Destination '{}' is the module itself; nothing was moved.", raw));
    }
    Ok(destination)
}

/// Move every regular file of `from` into `to`. Subdirectories stay behind.
fn move_files(from: &Path, to: &Path, report: &mut WorkflowReport) {
    let entries = match fs::read_dir(from) {
        Ok(entries) => entries,
        Err(err) => {
            report.record(format!("list {}", from.display()), Err(err.into()));
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                report.record(format!("list {}", from.display()), Err(err.into()));
                continue;
            }
        };
        if !entry.file_type().is_ok_and(|t| t.is_file()) {
            continue;
        }
        let name = entry.file_name();
        let target = to.join(&name);
        report.record(
            format!("move {}", name.to_string_lossy()),
            move_file(&entry.path(), &target).map_err(AppError::from),
        );
    }
}

fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        // Cross-device moves cannot rename.
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}

/// Copy every object under `source_key` to the relocated key, deleting each
/// source object only after its copy succeeded.
fn relocate_objects(
    objects: &impl ObjectStore,
    bucket: &str,
    source_key: &str,
    destination_key: &str,
    report: &mut WorkflowReport,
) {
    let keys = match objects.list_keys(bucket, source_key) {
        Ok(keys) => keys,
        Err(err) => {
            report.record(format!("list s3://{}/{}", bucket, source_key), Err(err));
            return;
        }
    };
    if keys.is_empty() {
        report.skip(RELOCATE_STEP, format!("no objects under s3://{}/{}", bucket, source_key));
        return;
    }
    for key in keys {
        let target = key.replacen(source_key, destination_key, 1);
        let step = format!("copy s3://{}/{} to {}", bucket, key, target);
        match objects.copy_object(bucket, &key, &target) {
            Ok(()) => {
                report.record(step, Ok(()));
                report.record(
                    format!("delete s3://{}/{}", bucket, key),
                    objects.delete_object(bucket, &key),
                );
            }
            Err(err) => report.record(step, Err(err)),
        }
    }
}
