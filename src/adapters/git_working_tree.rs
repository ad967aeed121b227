use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Repository};
use tracing::debug;

use crate::domain::AppError;
use crate::ports::VersionControl;

/// Stages paths in the git repository enclosing `root`.
#[derive(Debug, Clone)]
pub struct GitWorkingTree {
    root: PathBuf,
}

impl GitWorkingTree {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| {
            AppError::VersionControl(format!("git2::Repository::discover: {}", e.message()))
        })
    }
}

impl VersionControl for GitWorkingTree {
    fn stage(&self, path: &Path) -> Result<(), AppError> {
        let repo = self.repo()?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| AppError::VersionControl("repository has no working tree".into()))?;
        let workdir = workdir.canonicalize()?;

        let absolute = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };
        let absolute = match absolute.canonicalize() {
            Ok(resolved) => resolved,
            // Removed directories cannot be canonicalized; resolve through the parent.
            Err(_) => match (absolute.parent(), absolute.file_name()) {
                (Some(parent), Some(name)) => parent.canonicalize()?.join(name),
                _ => absolute,
            },
        };
        let pathspec = absolute.strip_prefix(&workdir).map_err(|_| {
            AppError::VersionControl(format!("{} is outside the repository", absolute.display()))
        })?;
        let pathspec = pathspec.to_string_lossy().replace('\\', "/");
        debug!(pathspec = %pathspec, "staging path");

        let mut index = repo
            .index()
            .map_err(|e| AppError::VersionControl(format!("git2::Repository::index: {}", e.message())))?;
        index
            .add_all([pathspec.as_str()], IndexAddOption::DEFAULT, None)
            .map_err(|e| AppError::VersionControl(format!("git2::Index::add_all: {}", e.message())))?;
        index
            .update_all([pathspec.as_str()], None)
            .map_err(|e| AppError::VersionControl(format!("git2::Index::update_all: {}", e.message())))?;
        index
            .write()
            .map_err(|e| AppError::VersionControl(format!("git2::Index::write: {}", e.message())))?;
        Ok(())
    }
}
