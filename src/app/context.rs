use crate::app::settings::Settings;
use crate::ports::{CommandRunner, LockTable, ObjectStore, VersionControl};

/// Application context holding settings and the external collaborators.
pub struct AppContext<R, O, L, V>
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    settings: Settings,
    runner: R,
    objects: O,
    locks: L,
    vcs: V,
}

impl<R, O, L, V> AppContext<R, O, L, V>
where
    R: CommandRunner,
    O: ObjectStore,
    L: LockTable,
    V: VersionControl,
{
    pub fn new(settings: Settings, runner: R, objects: O, locks: L, vcs: V) -> Self {
        Self { settings, runner, objects, locks, vcs }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Process runner for the IaC tool.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Object store holding remote state.
    pub fn objects(&self) -> &O {
        &self.objects
    }

    pub fn locks(&self) -> &L {
        &self.locks
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }
}
