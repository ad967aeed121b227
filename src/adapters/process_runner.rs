use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::CommandResult;
use crate::ports::CommandRunner;

/// Runs commands as child processes of the current process.
///
/// Stdin is inherited so tools can ask the operator for confirmation.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn spawn(&self, argv: &[String]) -> Result<CommandResult, std::io::Error> {
        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?
            .wait_with_output()?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, argv: &[String], quiet: bool) -> CommandResult {
        let Some(program) = argv.first() else {
            return CommandResult::not_started("Empty command");
        };

        if !self.is_available(program) {
            let result = CommandResult::not_started(format!("Command not found: {}", program));
            if !quiet {
                println!("Error: {}", result.stderr);
            }
            return result;
        }

        debug!(argv = ?argv, "spawning command");
        if !quiet {
            println!("Running command: {}", argv.join(" "));
        }

        match self.spawn(argv) {
            Ok(result) => {
                debug!(exit_code = ?result.exit_code, "command finished");
                if !quiet {
                    if !result.stdout.is_empty() {
                        println!("{}", result.stdout);
                    }
                    if !result.stderr.is_empty() {
                        println!("{}", result.stderr);
                    }
                }
                result
            }
            Err(err) => {
                if !quiet {
                    println!("\nError running command: {}\n", err);
                }
                CommandResult::not_started(err.to_string())
            }
        }
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
