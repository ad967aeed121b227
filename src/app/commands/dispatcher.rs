//! Per-module menus and the actions behind them.

use std::path::PathBuf;

use tracing::debug;

use crate::app::commands::workflows::{
    WorkflowOutcome, backend_destroy, module_destroy, module_move,
};
use crate::app::context::AppContext;
use crate::app::services::temp_cleaner;
use crate::domain::invocation::{run_argv, waits_for_acknowledgment};
use crate::domain::{
    ActionContext, AppError, CommandResult, Menu, MenuItem, ModulePath, ToolAction, WorkflowKind,
};
use crate::ports::{CommandRunner, LockTable, ObjectStore, Prompter, VersionControl};

pub const ACK_PROMPT: &str = "Press Enter to continue";

/// Navigation effect of choosing `item` in `menu`, before any side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Show(Menu),
    /// Back out of the module to its folder.
    LeaveModule,
    Exit,
    /// Run the item's action, then continue from the root menu.
    Perform(MenuItem),
}

pub fn next(menu: Menu, item: MenuItem) -> Transition {
    match (menu, item) {
        (_, MenuItem::Exit) => Transition::Exit,
        (Menu::Root, MenuItem::Back) => Transition::LeaveModule,
        (_, MenuItem::Back) => Transition::Show(Menu::Root),
        (_, MenuItem::Open(target)) => Transition::Show(target),
        (_, item) => Transition::Perform(item),
    }
}

/// What the session shows after one dispatcher step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Show(Menu),
    Folder(PathBuf),
    /// The cursor moved to another module; its backend must be resolved again.
    Module(ModulePath),
    Exit,
}

/// Show `menu` for the module under the cursor and act on the choice.
pub fn handle<R, O, L, V>(
    app: &AppContext<R, O, L, V>,
    prompter: &impl Prompter,
    context: &ActionContext,
    menu: Menu,
) -> Result<Step, AppError>
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    let menu = if menu.requires_backend() && !context.backend.is_ready() { Menu::Root } else { menu };
    let items = menu.items(context.backend.is_ready());
    let labels: Vec<String> = items.iter().map(|item| item.label().to_string()).collect();
    let choice = prompter.select(&menu.title(&context.module.to_string()), &labels)?;
    let item = choice.and_then(|idx| items.get(idx).copied()).unwrap_or(MenuItem::Back);
    debug!(menu = ?menu, item = ?item, "menu choice");

    match next(menu, item) {
        Transition::Show(target) => Ok(Step::Show(target)),
        Transition::LeaveModule => Ok(Step::Folder(context.module.parent_dir())),
        Transition::Exit => Ok(Step::Exit),
        Transition::Perform(item) => perform(app, prompter, context, item),
    }
}

fn perform<R, O, L, V>(
    app: &AppContext<R, O, L, V>,
    prompter: &impl Prompter,
    context: &ActionContext,
    item: MenuItem,
) -> Result<Step, AppError>
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    match item {
        MenuItem::Run(action) => {
            run_tool_action(app.runner(), prompter, &app.settings().tool, context, action)?;
        }
        MenuItem::LockInfo => show_lock_info(app.locks(), prompter, context)?,
        MenuItem::CleanFiles => {
            temp_cleaner::clean(&app.settings().base_dir);
            prompter.acknowledge(ACK_PROMPT)?;
        }
        MenuItem::Workflow(kind) => return run_workflow(app, prompter, context, kind),
        MenuItem::Open(_) | MenuItem::Back | MenuItem::Exit => {}
    }
    Ok(Step::Show(Menu::Root))
}

/// Ask for the action's inputs, run it against the module, and wait for the
/// operator unless the verb is fire-and-forget.
///
/// Returns `None` when a required answer was empty and nothing ran.
pub fn run_tool_action(
    runner: &impl CommandRunner,
    prompter: &impl Prompter,
    tool: &str,
    context: &ActionContext,
    action: ToolAction,
) -> Result<Option<CommandResult>, AppError> {
    let mut answers = Vec::with_capacity(action.prompts().len());
    for prompt in action.prompts() {
        answers.push(prompter.input(prompt.text)?);
    }
    let Some(verb_args) = action.verb_args(&answers) else {
        println!("A required value was left empty; nothing was run.");
        prompter.acknowledge(ACK_PROMPT)?;
        return Ok(None);
    };

    let argv = run_argv(tool, &verb_args, &context.module.absolute(), &context.versions);
    let result = runner.run(&argv, false);
    if waits_for_acknowledgment(&argv) {
        prompter.acknowledge(ACK_PROMPT)?;
    }
    Ok(Some(result))
}

/// Print the lock-table item held for the module's state, if any.
pub fn show_lock_info(
    locks: &impl LockTable,
    prompter: &impl Prompter,
    context: &ActionContext,
) -> Result<(), AppError> {
    match context.backend.s3() {
        None => println!("{}", AppError::BackendNotConfigured { module: context.module.to_string() }),
        Some(s3) => {
            println!("Showing LockID from DynamoDB table {}...", s3.lock_table());
            match locks.get_lock(s3.lock_table(), s3.lock_id()) {
                Ok(Some(entry)) => {
                    println!("LockID: {}", entry.lock_id);
                    for (name, value) in &entry.attributes {
                        println!("  {}: {}", name, value);
                    }
                }
                Ok(None) => println!("No lock held for {}", s3.lock_id()),
                Err(err) => println!("Error: {}", err),
            }
        }
    }
    prompter.acknowledge(ACK_PROMPT)
}

fn run_workflow<R, O, L, V>(
    app: &AppContext<R, O, L, V>,
    prompter: &impl Prompter,
    context: &ActionContext,
    kind: WorkflowKind,
) -> Result<Step, AppError>
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    let outcome = match kind {
        WorkflowKind::ModuleMove => {
            let destination = prompter.input("Destination path (e.g. aws/prod)")?;
            module_move::execute(app, context, &destination)
        }
        WorkflowKind::ModuleDestroy => {
            if !confirm(prompter, context, "destroy its resources, state, lock, and files")? {
                return Ok(Step::Show(Menu::Module));
            }
            module_destroy::execute(app, context)
        }
        WorkflowKind::BackendDestroy => {
            if !confirm(prompter, context, "delete its state and lock")? {
                return Ok(Step::Show(Menu::Module));
            }
            backend_destroy::execute(app, context)
        }
    };

    if let Some(report) = outcome.report()
        && !report.is_clean()
    {
        println!("{} step(s) failed; see the messages above.", report.failures().len());
    }
    prompter.acknowledge(ACK_PROMPT)?;

    Ok(match outcome {
        WorkflowOutcome::Aborted(_) => Step::Show(Menu::Module),
        WorkflowOutcome::Moved { destination, .. } => Step::Module(destination),
        WorkflowOutcome::Destroyed { parent, .. } => Step::Folder(parent),
        WorkflowOutcome::BackendDestroyed { .. } => Step::Show(Menu::Root),
    })
}

/// The operator must type the module path before destructive workflows run.
fn confirm(prompter: &impl Prompter, context: &ActionContext, what: &str) -> Result<bool, AppError> {
    let module = context.module.to_string();
    let answer = prompter.input(&format!("Type '{}' to {}", module, what))?;
    if answer.trim() == module {
        return Ok(true);
    }
    println!("Confirmation did not match; nothing was changed.");
    prompter.acknowledge(ACK_PROMPT)?;
    Ok(false)
}
