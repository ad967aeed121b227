mod fake_app;
mod journal;
mod memory_lock_table;
mod memory_object_store;
mod module_tree;
mod recording_vcs;
mod scripted_prompter;

#[allow(unused_imports)]
pub use fake_app::{FakeApp, fake_app};
#[allow(unused_imports)]
pub use fake_runner::FakeRunner;
#[allow(unused_imports)]
pub use journal::Journal;
#[allow(unused_imports)]
pub use memory_lock_table::MemoryLockTable;
#[allow(unused_imports)]
pub use memory_object_store::MemoryObjectStore;
#[allow(unused_imports)]
pub use module_tree::{ModuleTree, rendered_s3};
#[allow(unused_imports)]
pub use recording_vcs::RecordingVcs;
#[allow(unused_imports)]
pub use scripted_prompter::ScriptedPrompter;
