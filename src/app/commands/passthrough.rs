use crate::domain::invocation::run_argv;
use crate::domain::{CommandResult, ModulePath, ToolVersions};
use crate::ports::CommandRunner;

/// Run `<tool> run <verb> [args...]` against `module` without any prompts.
pub fn execute(
    runner: &impl CommandRunner,
    tool: &str,
    versions: &ToolVersions,
    module: &ModulePath,
    verb: &str,
    args: &[String],
) -> CommandResult {
    let mut verb_args = Vec::with_capacity(args.len() + 1);
    verb_args.push(verb.to_string());
    verb_args.extend(args.iter().cloned());
    let argv = run_argv(tool, &verb_args, &module.absolute(), versions);
    runner.run(&argv, false)
}
