use std::path::Path;

use crate::app::services::tool_versions::{OPENTOFU, TERRAFORM};
use crate::domain::invocation::compat_flags_enabled;
use crate::domain::{AppError, CommandResult, ToolVersions};
use crate::ports::CommandRunner;

/// Format HCL with the wrapper tool, then Terraform or OpenTofu sources.
pub fn execute(
    runner: &impl CommandRunner,
    tool: &str,
    versions: &ToolVersions,
    dir: &Path,
) -> Result<Vec<CommandResult>, AppError> {
    println!("Formatting HCL files...");
    let dir = dir.to_string_lossy().into_owned();
    // The working-directory flag was renamed with the CLI redesign.
    let working_dir_flag =
        if compat_flags_enabled(versions) { "--working-dir" } else { "--terragrunt-working-dir" };

    let engine = [TERRAFORM, OPENTOFU]
        .into_iter()
        .find(|program| runner.is_available(program))
        .ok_or_else(|| AppError::ToolNotFound { tool: TERRAFORM.to_string() })?;

    let hclfmt = vec![tool.to_string(), "hclfmt".to_string(), working_dir_flag.to_string(), dir.clone()];
    let fmt = vec![engine.to_string(), "fmt".to_string(), "-recursive".to_string(), dir];
    Ok(vec![runner.run(&hclfmt, false), runner.run(&fmt, false)])
}
