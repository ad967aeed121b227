//! Argument vectors for the IaC tool.

use std::path::Path;

use crate::domain::{BackendConfig, ModulePath, ToolVersions, Version};

/// Minimum Terragrunt version that understands the redesigned CLI flags.
///
/// Compared numerically per segment rather than as strings, so `0.100.0`
/// counts as newer than `0.73.0`.
pub const COMPAT_FLAGS_SINCE: &str = "0.73.0";

/// Appended to every `run` invocation once the tool is new enough.
pub const COMPAT_FLAGS: [&str; 3] = ["--tf-forward-stdout", "--experiment", "cli-redesign"];

/// Subcommands whose output does not need operator acknowledgment.
pub const FIRE_AND_FORGET: [&str; 2] = ["render-json", "init"];

/// Everything the dispatcher knows about the module under the cursor.
///
/// Replaced wholesale whenever the cursor moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    pub module: ModulePath,
    pub backend: BackendConfig,
    pub versions: ToolVersions,
}

impl ActionContext {
    pub fn new(module: ModulePath, backend: BackendConfig, versions: ToolVersions) -> Self {
        Self { module, backend, versions }
    }
}

/// `<tool> run <verb args...> --working-dir <module> [compat flags]`
pub fn run_argv(
    tool: &str,
    verb_args: &[String],
    module_dir: &Path,
    versions: &ToolVersions,
) -> Vec<String> {
    let mut argv = Vec::with_capacity(verb_args.len() + 7);
    argv.push(tool.to_string());
    argv.push("run".to_string());
    argv.extend(verb_args.iter().cloned());
    argv.push("--working-dir".to_string());
    argv.push(module_dir.to_string_lossy().into_owned());
    if compat_flags_enabled(versions) {
        argv.extend(COMPAT_FLAGS.iter().map(|flag| flag.to_string()));
    }
    argv
}

/// `<tool> render-json --out <path> --working-dir <module>`
pub fn render_json_argv(tool: &str, out: &Path, module_dir: &Path) -> Vec<String> {
    vec![
        tool.to_string(),
        "render-json".to_string(),
        "--out".to_string(),
        out.to_string_lossy().into_owned(),
        "--working-dir".to_string(),
        module_dir.to_string_lossy().into_owned(),
    ]
}

pub fn compat_flags_enabled(versions: &ToolVersions) -> bool {
    Version::parse(COMPAT_FLAGS_SINCE).is_some_and(|since| versions.terragrunt_at_least(&since))
}

/// Whether the operator must acknowledge the output before the menu re-renders.
pub fn waits_for_acknowledgment(argv: &[String]) -> bool {
    let subcommand = match argv.get(1).map(String::as_str) {
        Some("run") => argv.get(2),
        _ => argv.get(1),
    };
    !subcommand.is_some_and(|verb| FIRE_AND_FORGET.contains(&verb.as_str()))
}
