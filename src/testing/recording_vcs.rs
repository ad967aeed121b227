use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::VersionControl;
use crate::testing::Journal;

/// [`VersionControl`] that remembers staged paths.
#[derive(Default)]
pub struct RecordingVcs {
    pub staged: Mutex<Vec<PathBuf>>,
    failing: Mutex<bool>,
    journal: Journal,
}

impl RecordingVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self { journal: journal.clone(), ..Self::default() }
    }

    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }
}

impl VersionControl for RecordingVcs {
    fn stage(&self, path: &Path) -> Result<(), AppError> {
        self.journal.record(format!("vcs stage {}", path.display()));
        if *self.failing.lock().unwrap() {
            return Err(AppError::VersionControl("not a git repository".into()));
        }
        self.staged.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
