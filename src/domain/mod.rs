pub mod backend;
pub mod command;
pub mod error;
pub mod invocation;
pub mod menu;
pub mod module_path;
pub mod version;

pub use backend::{BackendConfig, S3Backend};
pub use command::CommandResult;
pub use error::AppError;
pub use invocation::ActionContext;
pub use menu::{ActionPrompt, Menu, MenuItem, ToolAction, WorkflowKind};
pub use module_path::{DirEntryKind, ModuleEntry, ModulePath};
pub use version::{ToolVersions, Version};
