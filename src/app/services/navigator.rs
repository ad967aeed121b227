//! Directory listing and cursor movement of the module tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::module_path::is_ignored_dir;
use crate::domain::{AppError, DirEntryKind, ModuleEntry};

/// Immediate subdirectories of `dir`, sorted by name and classified.
///
/// Dot-directories and tool cache directories are skipped. A directory is a
/// module when it contains `module_file`.
pub fn list_entries(dir: &Path, module_file: &str) -> Result<Vec<ModuleEntry>, AppError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored_dir(&name) {
            continue;
        }
        let kind = if path.join(module_file).is_file() {
            DirEntryKind::Module
        } else {
            DirEntryKind::Folder
        };
        entries.push(ModuleEntry { name, path, kind });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Folder shown after going back from `dir`, or `None` when `dir` is the base.
pub fn back_from(base: &Path, dir: &Path) -> Option<PathBuf> {
    if dir == base || !dir.starts_with(base) {
        return None;
    }
    dir.parent().map(Path::to_path_buf)
}

/// `dir` relative to `base`, rendered for menu titles.
pub fn display_relative(base: &Path, dir: &Path) -> String {
    match dir.strip_prefix(base) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => dir.display().to_string(),
    }
}
