//! Interactive navigator session: folder listings and per-module menus driven
//! by one loop.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::commands::dispatcher::{self, Step};
use crate::app::context::AppContext;
use crate::app::services::{backend_resolver, navigator};
use crate::domain::menu::{BACK_LABEL, EXIT_LABEL};
use crate::domain::{ActionContext, AppError, DirEntryKind, Menu, ModulePath, ToolVersions};
use crate::ports::{CommandRunner, LockTable, ObjectStore, Prompter, VersionControl};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator chose Exit.
    Exited,
    /// The operator backed out of the base directory.
    Left,
}

enum Screen {
    Folder(PathBuf),
    Module { context: ActionContext, menu: Menu },
}

enum FolderStep {
    Folder(PathBuf),
    Module(ModulePath),
    Left,
    Exit,
}

/// Drive the navigator from the base directory until the operator leaves.
pub fn run<R, O, L, V>(
    app: &AppContext<R, O, L, V>,
    prompter: &impl Prompter,
    versions: &ToolVersions,
) -> Result<SessionEnd, AppError>
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    let mut screen = Screen::Folder(app.settings().base_dir.clone());
    loop {
        screen = match screen {
            Screen::Folder(dir) => match folder_step(app, prompter, &dir)? {
                FolderStep::Folder(dir) => Screen::Folder(dir),
                FolderStep::Module(module) => enter(app, module, versions),
                FolderStep::Left => return Ok(SessionEnd::Left),
                FolderStep::Exit => return Ok(SessionEnd::Exited),
            },
            Screen::Module { context, menu } => {
                match dispatcher::handle(app, prompter, &context, menu)? {
                    Step::Show(menu) => Screen::Module { context, menu },
                    Step::Folder(dir) => Screen::Folder(dir),
                    Step::Module(module) => enter(app, module, versions),
                    Step::Exit => return Ok(SessionEnd::Exited),
                }
            }
        };
    }
}

/// Fresh context for the module under the cursor.
fn enter<R, O, L, V>(app: &AppContext<R, O, L, V>, module: ModulePath, versions: &ToolVersions) -> Screen
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    debug!(module = %module, "cursor on module");
    let backend = backend_resolver::resolve(app.runner(), app.settings(), &module);
    Screen::Module { context: ActionContext::new(module, backend, versions.clone()), menu: Menu::Root }
}

fn folder_step<R, O, L, V>(
    app: &AppContext<R, O, L, V>,
    prompter: &impl Prompter,
    dir: &Path,
) -> Result<FolderStep, AppError>
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    let base = &app.settings().base_dir;
    let shown = navigator::display_relative(base, dir);
    let entries = match navigator::list_entries(dir, &app.settings().module_file) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "listing failed");
            println!("Error: {}", err);
            Vec::new()
        }
    };
    if entries.is_empty() {
        println!("No modules or folders found in {}.", shown);
        prompter.acknowledge("Press Enter to go back")?;
        return Ok(up(base, dir));
    }

    let mut labels: Vec<String> = entries.iter().map(|entry| entry.label()).collect();
    labels.extend([BACK_LABEL.to_string(), EXIT_LABEL.to_string()]);
    let title = format!("Choose a module or folder ({})", shown);

    let Some(choice) = prompter.select(&title, &labels)? else {
        return Ok(up(base, dir));
    };
    match entries.get(choice) {
        Some(entry) => match entry.kind {
            DirEntryKind::Module => Ok(FolderStep::Module(ModulePath::from_absolute(base, &entry.path)?)),
            DirEntryKind::Folder => Ok(FolderStep::Folder(entry.path.clone())),
        },
        None if choice == entries.len() => Ok(up(base, dir)),
        None => Ok(FolderStep::Exit),
    }
}

fn up(base: &Path, dir: &Path) -> FolderStep {
    match navigator::back_from(base, dir) {
        Some(parent) => FolderStep::Folder(parent),
        None => FolderStep::Left,
    }
}
