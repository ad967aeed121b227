use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary base directory populated with modules and folders.
pub struct ModuleTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl ModuleTree {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("create temp dir") }
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create `relative` with a module descriptor inside.
    pub fn module(self, relative: &str) -> Self {
        self.file(&format!("{}/terragrunt.hcl", relative), "terraform {}\n")
    }

    pub fn folder(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative)).expect("create folder");
        self
    }

    pub fn file(self, relative: &str, content: &str) -> Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, content).expect("write file");
        self
    }
}

/// render-json output for an S3 backend with a lock table.
pub fn rendered_s3(bucket: &str, key: &str, table: &str) -> String {
    serde_json::json!({
        "remote_state": {
            "backend": "s3",
            "config": { "bucket": bucket, "key": key, "dynamodb_table": table }
        }
    })
    .to_string()
}
