use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;

/// Directory names that never appear in a listing (tool cache directories).
pub const IGNORED_DIRS: [&str; 2] = [".terragrunt-cache", ".terraform-plugin-cache"];

/// A module directory addressed relative to the navigator's base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePath {
    base: PathBuf,
    relative: PathBuf,
}

impl ModulePath {
    /// Build a module path, requiring `base/relative` to be an existing directory.
    pub fn new(base: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Result<Self, AppError> {
        let module = Self::unchecked(base, relative);
        if !module.absolute().is_dir() {
            return Err(AppError::ModuleNotFound(module.absolute()));
        }
        Ok(module)
    }

    /// Build a module path from an absolute directory inside `base`.
    pub fn from_absolute(base: &Path, absolute: &Path) -> Result<Self, AppError> {
        let relative = absolute.strip_prefix(base).map_err(|_| {
            AppError::config_error(format!(
                "{} is outside the base directory {}",
                absolute.display(),
                base.display()
            ))
        })?;
        Self::new(base, relative)
    }

    /// Build a module path without touching the filesystem.
    ///
    /// Used for destinations that do not exist yet.
    pub fn unchecked(base: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self { base: base.into(), relative: normalize(&relative.into()) }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path relative to the base directory, as typed by the operator.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn absolute(&self) -> PathBuf {
        self.base.join(&self.relative)
    }

    /// Absolute path of the folder containing this module.
    pub fn parent_dir(&self) -> PathBuf {
        match self.relative.parent() {
            Some(parent) => self.base.join(parent),
            None => self.base.clone(),
        }
    }

    /// Relative path rendered with `/` separators, matching how state keys are laid out.
    pub fn key_fragment(&self) -> String {
        self.relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative.as_os_str().is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.key_fragment())
        }
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Classification of a listed directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DirEntryKind {
    /// Contains the root descriptor file.
    Module,
    /// Plain directory to descend into.
    Folder,
}

/// One entry of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: DirEntryKind,
}

impl ModuleEntry {
    pub fn label(&self) -> String {
        match self.kind {
            DirEntryKind::Module => format!("🌟 {}", self.name),
            DirEntryKind::Folder => format!("📁 {}", self.name),
        }
    }
}

/// Whether a directory name is skipped during traversal.
pub fn is_ignored_dir(name: &str) -> bool {
    name.starts_with('.') || IGNORED_DIRS.contains(&name)
}
