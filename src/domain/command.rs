/// Captured output of an external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process never ran or was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// Result for a command that could not be started.
    pub fn not_started(message: impl Into<String>) -> Self {
        Self { stdout: String::new(), stderr: message.into(), exit_code: None }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
