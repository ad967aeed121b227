use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{LockEntry, LockTable};
use crate::testing::Journal;

/// In-memory [`LockTable`] keyed by `(table, lock_id)`.
#[derive(Default)]
pub struct MemoryLockTable {
    pub entries: Mutex<BTreeMap<(String, String), LockEntry>>,
    failing: Mutex<bool>,
    journal: Journal,
}

impl MemoryLockTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self { journal: journal.clone(), ..Self::default() }
    }

    pub fn insert(&self, table: &str, lock_id: &str, info: &str) {
        let entry = LockEntry {
            lock_id: lock_id.to_string(),
            attributes: BTreeMap::from([("Info".to_string(), info.to_string())]),
        };
        self.entries.lock().unwrap().insert((table.to_string(), lock_id.to_string()), entry);
    }

    pub fn contains(&self, table: &str, lock_id: &str) -> bool {
        self.entries.lock().unwrap().contains_key(&(table.to_string(), lock_id.to_string()))
    }

    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    fn check(&self) -> Result<(), AppError> {
        if *self.failing.lock().unwrap() {
            return Err(AppError::external("DynamoDB", "injected failure"));
        }
        Ok(())
    }
}

impl LockTable for MemoryLockTable {
    fn get_lock(&self, table: &str, lock_id: &str) -> Result<Option<LockEntry>, AppError> {
        self.journal.record(format!("lock get {}/{}", table, lock_id));
        self.check()?;
        Ok(self.entries.lock().unwrap().get(&(table.to_string(), lock_id.to_string())).cloned())
    }

    fn delete_lock(&self, table: &str, lock_id: &str) -> Result<(), AppError> {
        self.journal.record(format!("lock delete {}/{}", table, lock_id));
        self.check()?;
        self.entries.lock().unwrap().remove(&(table.to_string(), lock_id.to_string()));
        Ok(())
    }
}
