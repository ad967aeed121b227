//! Shared testing harness for `tgnav` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tools;

/// Isolated module tree plus fake tool binaries on a private PATH.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
}

impl TestContext {
    /// Create a new environment with fake `terragrunt` and `terraform`.
    pub(crate) fn new() -> Self {
        let ctx = Self::without_tools();
        fake_tools::install_terragrunt(&ctx.bin_dir, &ctx.log_file);
        fake_tools::install_terraform(&ctx.bin_dir, &ctx.log_file);
        ctx
    }

    /// Create an environment whose PATH holds no tools at all.
    pub(crate) fn without_tools() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("infra");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        let work_dir = work_dir.canonicalize().expect("Failed to canonicalize work directory");
        let log_file = root.path().join("tools.log");
        Self { root, work_dir, bin_dir, log_file }
    }

    /// Base directory the CLI runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Create a module (directory with `terragrunt.hcl`) under the work directory.
    pub(crate) fn module(&self, relative: &str) -> PathBuf {
        let dir = self.work_dir.join(relative);
        fs::create_dir_all(&dir).expect("Failed to create module directory");
        fs::write(dir.join("terragrunt.hcl"), "terraform {}\n").expect("Failed to write descriptor");
        dir
    }

    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Every argv the fake tools received, one per line.
    pub(crate) fn tool_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// Build a command for the compiled `tgnav` binary inside the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tgnav").expect("Failed to locate tgnav binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", &self.bin_dir)
            .env("TGNAV_RENDER_OUT", self.root.path().join("rendered.json"))
            .env_remove("TGNAV_MODULE_FILE")
            .env_remove("TGNAV_ROOT_CONFIG")
            .env_remove("TGNAV_TOOL")
            .env_remove("TGNAV_USE_S3_BACKEND")
            .env_remove("TGNAV_USE_DYNAMODB_LOCKS")
            .env_remove("FAKE_RENDER_JSON")
            .env_remove("FAKE_TG_EXIT")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// render-json output for an S3 backend with a lock table.
pub(crate) fn rendered_s3(bucket: &str, key: &str, table: &str) -> String {
    serde_json::json!({
        "remote_state": {
            "backend": "s3",
            "config": { "bucket": bucket, "key": key, "dynamodb_table": table }
        }
    })
    .to_string()
}
