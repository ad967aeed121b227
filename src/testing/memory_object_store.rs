use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ObjectStore;
use crate::testing::Journal;

/// In-memory [`ObjectStore`] keyed by `(bucket, key)`.
#[derive(Default)]
pub struct MemoryObjectStore {
    pub objects: Mutex<BTreeMap<(String, String), String>>,
    failing: Mutex<BTreeSet<&'static str>>,
    journal: Journal,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self { journal: journal.clone(), ..Self::default() }
    }

    pub fn put(&self, bucket: &str, key: &str, body: &str) {
        self.objects.lock().unwrap().insert((bucket.to_string(), key.to_string()), body.to_string());
    }

    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, key)| key.clone())
            .collect()
    }

    /// Make every call of `operation` (`list`, `copy`, `delete`) fail.
    pub fn fail_on(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    fn check(&self, operation: &'static str) -> Result<(), AppError> {
        if self.failing.lock().unwrap().contains(operation) {
            return Err(AppError::external("S3", format!("injected {} failure", operation)));
        }
        Ok(())
    }
}

impl ObjectStore for MemoryObjectStore {
    fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, AppError> {
        self.journal.record(format!("s3 list {}/{}", bucket, prefix));
        self.check("list")?;
        Ok(self.keys(bucket).into_iter().filter(|key| key.starts_with(prefix)).collect())
    }

    fn copy_object(&self, bucket: &str, from_key: &str, to_key: &str) -> Result<(), AppError> {
        self.journal.record(format!("s3 copy {}/{} -> {}", bucket, from_key, to_key));
        self.check("copy")?;
        let mut objects = self.objects.lock().unwrap();
        let body = objects
            .get(&(bucket.to_string(), from_key.to_string()))
            .cloned()
            .ok_or_else(|| AppError::external("S3", format!("NoSuchKey: {}", from_key)))?;
        objects.insert((bucket.to_string(), to_key.to_string()), body);
        Ok(())
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<(), AppError> {
        self.journal.record(format!("s3 delete {}/{}", bucket, key));
        self.check("delete")?;
        self.objects.lock().unwrap().remove(&(bucket.to_string(), key.to_string()));
        Ok(())
    }
}
