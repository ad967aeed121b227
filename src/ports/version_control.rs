use std::path::Path;

use crate::domain::AppError;

/// Working-tree operations of the version-control system.
pub trait VersionControl {
    /// Stage everything under `path` (files, additions, and deletions).
    fn stage(&self, path: &Path) -> Result<(), AppError>;
}
