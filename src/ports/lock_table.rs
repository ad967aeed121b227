use std::collections::BTreeMap;

use crate::domain::AppError;

/// Item stored in the lock table for one state file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEntry {
    pub lock_id: String,
    /// Remaining attributes rendered as strings (`Info`, `Digest`, ...).
    pub attributes: BTreeMap<String, String>,
}

/// Distributed lock table keyed by `LockID`.
pub trait LockTable {
    /// Fetch the entry for `lock_id`, if one exists.
    fn get_lock(&self, table: &str, lock_id: &str) -> Result<Option<LockEntry>, AppError>;

    /// Delete the entry for `lock_id`. Deleting a missing entry is not an error.
    fn delete_lock(&self, table: &str, lock_id: &str) -> Result<(), AppError>;
}
