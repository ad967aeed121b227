pub mod aws;
pub mod dialoguer_prompter;
pub mod git_working_tree;
pub mod process_runner;

pub use aws::{AwsSession, DynamoDbLockTable, S3ObjectStore};
pub use dialoguer_prompter::DialoguerPrompter;
pub use git_working_tree::GitWorkingTree;
pub use process_runner::ProcessCommandRunner;
