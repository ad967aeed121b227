//! API facade for the application.
//!
//! Glues settings, production adapters, and commands together for the CLI.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::adapters::{
    AwsSession, DialoguerPrompter, DynamoDbLockTable, GitWorkingTree, ProcessCommandRunner,
    S3ObjectStore,
};
use crate::app::AppContext;
use crate::app::commands::{format, passthrough, session};
use crate::app::services::tool_versions::{self, OPENTOFU, TERRAFORM};
use crate::app::services::{backend_resolver, temp_cleaner};
use crate::app::settings::Settings;
use crate::ports::CommandRunner;

pub use crate::app::commands::session::SessionEnd;
pub use crate::app::services::temp_cleaner::CleanReport;
pub use crate::domain::{AppError, BackendConfig, CommandResult, ModulePath, ToolVersions};

type ProductionContext =
    AppContext<ProcessCommandRunner, S3ObjectStore, DynamoDbLockTable, GitWorkingTree>;

fn create_context(settings: Settings) -> Result<ProductionContext, AppError> {
    let session = AwsSession::new()?;
    let vcs = GitWorkingTree::new(settings.base_dir.clone());
    Ok(AppContext::new(
        settings,
        ProcessCommandRunner::new(),
        S3ObjectStore::new(session.clone()),
        DynamoDbLockTable::new(session),
        vcs,
    ))
}

/// Settings for `base_dir` (default: the current directory).
pub fn load_settings(base_dir: Option<PathBuf>) -> Result<Settings, AppError> {
    let base_dir = match base_dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    if !base_dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Base directory {} does not exist",
            base_dir.display()
        )));
    }
    Settings::from_env(base_dir.canonicalize()?)
}

/// The IaC tool and at least one engine (Terraform or OpenTofu) must be installed.
pub fn preflight(runner: &impl CommandRunner, settings: &Settings) -> Result<(), AppError> {
    if !runner.is_available(&settings.tool) {
        return Err(AppError::ToolNotFound { tool: settings.tool.clone() });
    }
    if !runner.is_available(TERRAFORM) && !runner.is_available(OPENTOFU) {
        return Err(AppError::ToolNotFound { tool: format!("{} or {}", TERRAFORM, OPENTOFU) });
    }
    Ok(())
}

/// Module under `settings.base_dir`, given relative to it or as an absolute path.
pub fn module_path(settings: &Settings, module: &Path) -> Result<ModulePath, AppError> {
    if module.is_absolute() {
        let absolute = module.canonicalize().map_err(|_| AppError::ModuleNotFound(module.to_path_buf()))?;
        ModulePath::from_absolute(&settings.base_dir, &absolute)
    } else {
        ModulePath::new(&settings.base_dir, module)
    }
}

/// Interactive navigator session rooted at `base_dir`.
pub fn browse(base_dir: Option<PathBuf>) -> Result<SessionEnd, AppError> {
    let settings = load_settings(base_dir)?;
    let ctx = create_context(settings)?;
    preflight(ctx.runner(), ctx.settings())?;

    let root_config = ctx.settings().root_config_path();
    if !root_config.is_file() {
        warn!(path = %root_config.display(), "root configuration missing");
        println!("Warning: {} not found; modules may not render.", root_config.display());
    }

    let versions = tool_versions::probe(ctx.runner(), &ctx.settings().tool);
    info!(versions = ?versions, "tool chain");
    session::run(&ctx, &DialoguerPrompter::new(), &versions)
}

/// One-shot `<tool> run <verb> [args...]` against `module`.
pub fn run_module(
    base_dir: Option<PathBuf>,
    verb: &str,
    module: &Path,
    args: &[String],
) -> Result<CommandResult, AppError> {
    let settings = load_settings(base_dir)?;
    let runner = ProcessCommandRunner::new();
    preflight(&runner, &settings)?;
    let module = module_path(&settings, module)?;
    let versions = tool_versions::probe(&runner, &settings.tool);
    Ok(passthrough::execute(&runner, &settings.tool, &versions, &module, verb, args))
}

/// Resolve the remote backend of `module`.
pub fn backend(base_dir: Option<PathBuf>, module: &Path) -> Result<BackendConfig, AppError> {
    let settings = load_settings(base_dir)?;
    let runner = ProcessCommandRunner::new();
    if !runner.is_available(&settings.tool) {
        return Err(AppError::ToolNotFound { tool: settings.tool.clone() });
    }
    let module = module_path(&settings, module)?;
    Ok(backend_resolver::resolve(&runner, &settings, &module))
}

/// Remove tool scratch files under `path` (default: the base directory).
pub fn clean(base_dir: Option<PathBuf>, path: Option<PathBuf>) -> Result<CleanReport, AppError> {
    let path = match path {
        Some(path) => path,
        None => load_settings(base_dir)?.base_dir,
    };
    if !path.is_dir() {
        return Err(AppError::ModuleNotFound(path));
    }
    Ok(temp_cleaner::clean(&path))
}

/// Format HCL and Terraform sources under `base_dir`.
pub fn fmt(base_dir: Option<PathBuf>) -> Result<Vec<CommandResult>, AppError> {
    let settings = load_settings(base_dir)?;
    let runner = ProcessCommandRunner::new();
    preflight(&runner, &settings)?;
    let versions = tool_versions::probe(&runner, &settings.tool);
    format::execute(&runner, &settings.tool, &versions, &settings.base_dir)
}
