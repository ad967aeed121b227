//! tgnav: browse Terragrunt modules and keep their files, S3 state, and
//! DynamoDB locks consistent while moving or destroying them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    SessionEnd, backend, browse, clean, fmt, load_settings, module_path, preflight, run_module,
};
pub use app::{AppContext, Settings};
pub use domain::{AppError, BackendConfig, CommandResult, ModulePath, ToolVersions};
