//! Removal of Terraform and Terragrunt scratch files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Directories removed wherever they appear.
pub const TEMP_DIRS: [&str; 2] = [".terraform", "registry.terraform.io"];

/// Cache directory kept when its parent holds [`KEEP_MARKER`].
pub const CACHE_DIR: &str = ".terragrunt-cache";

pub const KEEP_MARKER: &str = ".gitkeep";

/// Files removed wherever they appear.
pub const TEMP_FILES: [&str; 3] = [".terraform.lock.hcl", "terragrunt-debug.tfvars.json", "tfplan"];

#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Walk `root` and delete scratch files, printing each outcome.
///
/// Failures are recorded and the walk continues.
pub fn clean(root: &Path) -> CleanReport {
    println!("Cleaning temporary files in {}", root.display());
    let mut report = CleanReport::default();
    let mut walker = WalkDir::new(root).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                println!("Error reading {}: {}", path.display(), err);
                report.failed.push((path, err.to_string()));
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let path = entry.path();
        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() {
            let cache = name == CACHE_DIR;
            if cache && path.parent().is_some_and(|parent| parent.join(KEEP_MARKER).is_file()) {
                println!("Skipping {}", path.display());
                report.skipped.push(path.to_path_buf());
                walker.skip_current_dir();
            } else if cache || TEMP_DIRS.contains(&&*name) {
                record(&mut report, path, fs::remove_dir_all(path));
                walker.skip_current_dir();
            }
        } else if TEMP_FILES.contains(&&*name) {
            record(&mut report, path, fs::remove_file(path));
        }
    }

    debug!(
        removed = report.removed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "clean finished"
    );
    report
}

fn record(report: &mut CleanReport, path: &Path, result: std::io::Result<()>) {
    match result {
        Ok(()) => {
            println!("Removed {}", path.display());
            report.removed.push(path.to_path_buf());
        }
        Err(err) => {
            println!("Error removing {}: {}", path.display(), err);
            report.failed.push((path.to_path_buf(), err.to_string()));
        }
    }
}
