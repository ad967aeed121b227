//! Menu model of the per-module action dispatcher.

/// A menu bound to the module under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Root,
    State,
    Module,
    Taint,
    Lock,
}

impl Menu {
    /// Options offered by this menu. Backend-dependent entries are absent, not
    /// disabled, when `backend_ready` is false.
    pub fn items(self, backend_ready: bool) -> Vec<MenuItem> {
        let mut items = match self {
            Menu::Root => {
                let mut items = vec![
                    MenuItem::Run(ToolAction::Plan),
                    MenuItem::Run(ToolAction::Apply),
                    MenuItem::Run(ToolAction::Import),
                    MenuItem::Run(ToolAction::Destroy),
                    MenuItem::Run(ToolAction::Output),
                    MenuItem::Run(ToolAction::Init),
                    MenuItem::Run(ToolAction::Validate),
                    MenuItem::Run(ToolAction::Refresh),
                    MenuItem::Open(Menu::Taint),
                    MenuItem::CleanFiles,
                ];
                if backend_ready {
                    items.extend([
                        MenuItem::Open(Menu::State),
                        MenuItem::Open(Menu::Module),
                        MenuItem::Open(Menu::Lock),
                    ]);
                }
                items
            }
            Menu::State => vec![
                MenuItem::Run(ToolAction::StateList),
                MenuItem::Run(ToolAction::StateMove),
                MenuItem::Run(ToolAction::StateRemove),
                MenuItem::Run(ToolAction::StateShow),
                MenuItem::Run(ToolAction::StatePull),
                MenuItem::Run(ToolAction::StatePush),
            ],
            Menu::Module => vec![
                MenuItem::Workflow(WorkflowKind::ModuleMove),
                MenuItem::Workflow(WorkflowKind::ModuleDestroy),
                MenuItem::Workflow(WorkflowKind::BackendDestroy),
            ],
            Menu::Taint => {
                vec![MenuItem::Run(ToolAction::Untaint), MenuItem::Run(ToolAction::Taint)]
            }
            Menu::Lock => vec![MenuItem::LockInfo, MenuItem::Run(ToolAction::ForceUnlock)],
        };
        items.extend([MenuItem::Back, MenuItem::Exit]);
        items
    }

    /// Whether the menu can only be reached with a resolved backend.
    pub fn requires_backend(self) -> bool {
        matches!(self, Menu::State | Menu::Module | Menu::Lock)
    }

    pub fn title(self, module: &str) -> String {
        let what = match self {
            Menu::Root => "an action",
            Menu::State => "a state operation",
            Menu::Module => "a module operation",
            Menu::Taint => "a taint operation",
            Menu::Lock => "a lock operation",
        };
        format!("Current module: {}. Choose {}:", module, what)
    }
}

/// One selectable entry of a [`Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Run(ToolAction),
    Open(Menu),
    Workflow(WorkflowKind),
    LockInfo,
    CleanFiles,
    Back,
    Exit,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Run(action) => action.label(),
            MenuItem::Open(Menu::Root) => "⌂ Actions",
            MenuItem::Open(Menu::State) => "📁 State operations",
            MenuItem::Open(Menu::Module) => "📁 Module operations",
            MenuItem::Open(Menu::Taint) => "📁 Taint operations",
            MenuItem::Open(Menu::Lock) => "📁 Lock operations",
            MenuItem::Workflow(kind) => kind.label(),
            MenuItem::LockInfo => "ℹ️  Lock info",
            MenuItem::CleanFiles => "🧹 Clean temporary files",
            MenuItem::Back => BACK_LABEL,
            MenuItem::Exit => EXIT_LABEL,
        }
    }
}

pub const BACK_LABEL: &str = "🔙 Back";
pub const EXIT_LABEL: &str = "❌ Exit";

/// Multi-store operations on the module under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    ModuleMove,
    ModuleDestroy,
    BackendDestroy,
}

impl WorkflowKind {
    pub fn label(self) -> &'static str {
        match self {
            WorkflowKind::ModuleMove => "↔️  Move module",
            WorkflowKind::ModuleDestroy => "🗑️  Destroy module",
            WorkflowKind::BackendDestroy => "🚮 Destroy backend",
        }
    }
}

/// Free-text question asked before running a tool action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPrompt {
    pub text: &'static str,
    /// An empty answer to a required prompt cancels the action.
    pub required: bool,
}

const fn optional(text: &'static str) -> ActionPrompt {
    ActionPrompt { text, required: false }
}

const fn required(text: &'static str) -> ActionPrompt {
    ActionPrompt { text, required: true }
}

/// Leaf action that runs one tool subcommand against the current module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    Plan,
    Apply,
    Import,
    Destroy,
    Output,
    Init,
    Validate,
    Refresh,
    StateList,
    StateMove,
    StateRemove,
    StateShow,
    StatePull,
    StatePush,
    Taint,
    Untaint,
    ForceUnlock,
}

impl ToolAction {
    pub fn label(self) -> &'static str {
        match self {
            ToolAction::Plan => "📋 Plan",
            ToolAction::Apply => "✅ Apply",
            ToolAction::Import => "📎 Import",
            ToolAction::Destroy => "💣 Destroy",
            ToolAction::Output => "📤 Output",
            ToolAction::Init => "🚀 Initialize",
            ToolAction::Validate => "👌 Validate",
            ToolAction::Refresh => "🔄 Refresh",
            ToolAction::StateList => "📄 List",
            ToolAction::StateMove => "📦 Move",
            ToolAction::StateRemove => "🗑️  Remove",
            ToolAction::StateShow => "🔍 Show",
            ToolAction::StatePull => "↘️  Pull",
            ToolAction::StatePush => "↗️  Push",
            ToolAction::Taint => "🚫 Taint",
            ToolAction::Untaint => "♻️  Untaint",
            ToolAction::ForceUnlock => "🔓 Unlock",
        }
    }

    pub fn prompts(self) -> &'static [ActionPrompt] {
        const PLAN: [ActionPrompt; 1] =
            [optional("Target to plan (e.g. module.resource; empty runs the whole module)")];
        const APPLY: [ActionPrompt; 1] =
            [optional("Target to apply (e.g. module.resource; empty runs the whole module)")];
        const DESTROY: [ActionPrompt; 1] =
            [optional("Target to destroy (e.g. module.resource; empty runs the whole module)")];
        const IMPORT: [ActionPrompt; 2] = [
            required("Address of the resource to import (e.g. aws_instance.example)"),
            required("Resource ID to import (e.g. i-12345678)"),
        ];
        const OUTPUT: [ActionPrompt; 1] =
            [optional("Output variable to show (e.g. my_output; empty shows all)")];
        const STATE_LIST: [ActionPrompt; 1] =
            [optional("Address filter for the listing (e.g. module.example; empty lists all)")];
        const STATE_MOVE: [ActionPrompt; 2] = [
            required("Source address (e.g. module.one.aws_instance.this)"),
            required("Destination address (e.g. module.two.aws_instance.this)"),
        ];
        const STATE_REMOVE: [ActionPrompt; 1] =
            [required("Address of the resource to remove (e.g. aws_instance.example)")];
        const STATE_SHOW: [ActionPrompt; 1] =
            [required("Address of the resource to show (e.g. aws_instance.example)")];
        const TAINT: [ActionPrompt; 1] =
            [required("Address of the resource to taint (e.g. aws_instance.example)")];
        const UNTAINT: [ActionPrompt; 1] =
            [required("Address of the resource to untaint (e.g. aws_instance.example)")];
        const FORCE_UNLOCK: [ActionPrompt; 1] = [required("Lock ID to release")];

        match self {
            ToolAction::Plan => &PLAN,
            ToolAction::Apply => &APPLY,
            ToolAction::Destroy => &DESTROY,
            ToolAction::Import => &IMPORT,
            ToolAction::Output => &OUTPUT,
            ToolAction::StateList => &STATE_LIST,
            ToolAction::StateMove => &STATE_MOVE,
            ToolAction::StateRemove => &STATE_REMOVE,
            ToolAction::StateShow => &STATE_SHOW,
            ToolAction::Taint => &TAINT,
            ToolAction::Untaint => &UNTAINT,
            ToolAction::ForceUnlock => &FORCE_UNLOCK,
            ToolAction::Init
            | ToolAction::Validate
            | ToolAction::Refresh
            | ToolAction::StatePull
            | ToolAction::StatePush => &[],
        }
    }

    /// Verb and arguments following `run`, or `None` when a required answer is empty.
    ///
    /// `answers` must line up with [`ToolAction::prompts`].
    pub fn verb_args(self, answers: &[String]) -> Option<Vec<String>> {
        for (prompt, answer) in self.prompts().iter().zip(answers) {
            if prompt.required && answer.trim().is_empty() {
                return None;
            }
        }
        let answer = |idx: usize| answers.get(idx).map(|a| a.trim().to_string()).unwrap_or_default();
        let words = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();

        let args = match self {
            ToolAction::Plan | ToolAction::Apply | ToolAction::Destroy => {
                let mut args = words(&[self.verb()]);
                let target = answer(0);
                if !target.is_empty() {
                    args.extend(["-target".to_string(), target]);
                }
                args
            }
            ToolAction::Output | ToolAction::StateList => {
                let mut args = words(self.verb_words());
                let filter = answer(0);
                if !filter.is_empty() {
                    args.push(filter);
                }
                args
            }
            ToolAction::Import | ToolAction::StateMove => {
                let mut args = words(self.verb_words());
                args.extend([answer(0), answer(1)]);
                args
            }
            ToolAction::StateRemove
            | ToolAction::StateShow
            | ToolAction::Taint
            | ToolAction::Untaint
            | ToolAction::ForceUnlock => {
                let mut args = words(self.verb_words());
                args.push(answer(0));
                args
            }
            ToolAction::Init
            | ToolAction::Validate
            | ToolAction::Refresh
            | ToolAction::StatePull
            | ToolAction::StatePush => words(self.verb_words()),
        };
        Some(args)
    }

    fn verb(self) -> &'static str {
        self.verb_words()[0]
    }

    fn verb_words(self) -> &'static [&'static str] {
        match self {
            ToolAction::Plan => &["plan"],
            ToolAction::Apply => &["apply"],
            ToolAction::Import => &["import"],
            ToolAction::Destroy => &["destroy"],
            ToolAction::Output => &["output"],
            ToolAction::Init => &["init"],
            ToolAction::Validate => &["validate"],
            ToolAction::Refresh => &["refresh"],
            ToolAction::StateList => &["state", "list"],
            ToolAction::StateMove => &["state", "mv"],
            ToolAction::StateRemove => &["state", "rm"],
            ToolAction::StateShow => &["state", "show"],
            ToolAction::StatePull => &["state", "pull"],
            ToolAction::StatePush => &["state", "push"],
            ToolAction::Taint => &["taint"],
            ToolAction::Untaint => &["untaint"],
            ToolAction::ForceUnlock => &["force-unlock"],
        }
    }
}
