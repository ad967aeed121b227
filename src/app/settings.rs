//! Environment-driven configuration.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

pub const MODULE_FILE_ENV: &str = "TGNAV_MODULE_FILE";
pub const ROOT_CONFIG_ENV: &str = "TGNAV_ROOT_CONFIG";
pub const RENDER_OUT_ENV: &str = "TGNAV_RENDER_OUT";
pub const TOOL_ENV: &str = "TGNAV_TOOL";
pub const USE_S3_BACKEND_ENV: &str = "TGNAV_USE_S3_BACKEND";
pub const USE_DYNAMODB_LOCKS_ENV: &str = "TGNAV_USE_DYNAMODB_LOCKS";

pub const DEFAULT_MODULE_FILE: &str = "terragrunt.hcl";
pub const DEFAULT_ROOT_CONFIG: &str = "root.hcl";
pub const DEFAULT_RENDER_FILE: &str = "terragrunt_rendered.json";
pub const DEFAULT_TOOL: &str = "terragrunt";

/// Runtime settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the navigator starts in and never leaves.
    pub base_dir: PathBuf,
    /// File whose presence marks a directory as a module.
    pub module_file: String,
    /// Repository-level root configuration, relative to `base_dir`.
    pub root_config: String,
    /// Where render-json writes the module's resolved configuration.
    pub render_out: PathBuf,
    pub tool: String,
    pub use_s3_backend: bool,
    pub use_dynamodb_locks: bool,
}

impl Settings {
    /// Defaults for `base_dir`, ignoring the environment.
    pub fn with_defaults(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            module_file: DEFAULT_MODULE_FILE.to_string(),
            root_config: DEFAULT_ROOT_CONFIG.to_string(),
            render_out: env::temp_dir().join(DEFAULT_RENDER_FILE),
            tool: DEFAULT_TOOL.to_string(),
            use_s3_backend: true,
            use_dynamodb_locks: true,
        }
    }

    /// Defaults for `base_dir` overridden by `TGNAV_*` environment variables.
    pub fn from_env(base_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let mut settings = Self::with_defaults(base_dir);
        if let Some(value) = non_empty_var(MODULE_FILE_ENV) {
            settings.module_file = value;
        }
        if let Some(value) = non_empty_var(ROOT_CONFIG_ENV) {
            settings.root_config = value;
        }
        if let Some(value) = non_empty_var(RENDER_OUT_ENV) {
            // The tool runs inside the module directory; anchor relative paths at the base.
            let path = PathBuf::from(value);
            settings.render_out =
                if path.is_absolute() { path } else { settings.base_dir.join(path) };
        }
        if let Some(value) = non_empty_var(TOOL_ENV) {
            settings.tool = value;
        }
        if let Some(value) = non_empty_var(USE_S3_BACKEND_ENV) {
            settings.use_s3_backend = parse_bool(USE_S3_BACKEND_ENV, &value)?;
        }
        if let Some(value) = non_empty_var(USE_DYNAMODB_LOCKS_ENV) {
            settings.use_dynamodb_locks = parse_bool(USE_DYNAMODB_LOCKS_ENV, &value)?;
        }
        Ok(settings)
    }

    /// Backend-dependent features need both the state store and the lock table.
    pub fn remote_backend_enabled(&self) -> bool {
        self.use_s3_backend && self.use_dynamodb_locks
    }

    pub fn root_config_path(&self) -> PathBuf {
        self.base_dir.join(&self.root_config)
    }

    pub fn is_module_dir(&self, dir: &Path) -> bool {
        dir.join(&self.module_file).is_file()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config_error(format!(
            "Invalid value for {}: '{}' (expected true or false)",
            key, value
        ))),
    }
}
