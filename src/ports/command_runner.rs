use crate::domain::CommandResult;

/// Executes external processes.
pub trait CommandRunner {
    /// Run `argv` without shell interpretation and wait for it to exit.
    ///
    /// Never fails: a missing binary yields `("", "Command not found: <argv[0]>")`
    /// and spawn errors are returned in `stderr`. When `quiet` is false the argv
    /// and the captured output are echoed to the terminal.
    fn run(&self, argv: &[String], quiet: bool) -> CommandResult;

    /// Whether `program` resolves on the executable search path.
    fn is_available(&self, program: &str) -> bool;
}
