use tracing::debug;

use crate::domain::{ToolVersions, Version};
use crate::ports::CommandRunner;

pub const TERRAFORM: &str = "terraform";
pub const OPENTOFU: &str = "tofu";

/// Probe the tool chain once; any failed probe leaves that version empty.
pub fn probe(runner: &impl CommandRunner, tool: &str) -> ToolVersions {
    ToolVersions {
        terragrunt: probe_one(runner, &[tool, "--version"]),
        terraform: probe_one(runner, &[TERRAFORM, "-version"]),
        opentofu: probe_one(runner, &[OPENTOFU, "--version"]),
    }
}

fn probe_one(runner: &impl CommandRunner, argv: &[&str]) -> Option<Version> {
    if !runner.is_available(argv[0]) {
        debug!(program = argv[0], "not installed; skipping version probe");
        return None;
    }
    let argv: Vec<String> = argv.iter().map(|arg| arg.to_string()).collect();
    let result = runner.run(&argv, true);
    let version = Version::from_version_output(&result.stdout);
    debug!(program = %argv[0], version = ?version.as_ref().map(Version::to_string), "probed version");
    version
}
