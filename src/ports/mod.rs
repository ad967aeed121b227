mod command_runner;
mod lock_table;
mod object_store;
mod prompter;
mod version_control;

pub use command_runner::CommandRunner;
pub use lock_table::{LockEntry, LockTable};
pub use object_store::ObjectStore;
pub use prompter::Prompter;
pub use version_control::VersionControl;
