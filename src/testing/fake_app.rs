use crate::app::context::AppContext;
use crate::app::settings::Settings;
use crate::testing::{FakeRunner, Journal, MemoryLockTable, MemoryObjectStore, RecordingVcs};

pub type FakeApp = AppContext<FakeRunner, MemoryObjectStore, MemoryLockTable, RecordingVcs>;

/// Context wired to in-memory fakes that all write to `journal`.
pub fn fake_app(settings: Settings, journal: &Journal) -> FakeApp {
    AppContext::new(
        settings,
        FakeRunner::with_journal(journal),
        MemoryObjectStore::with_journal(journal),
        MemoryLockTable::with_journal(journal),
        RecordingVcs::with_journal(journal),
    )
}
