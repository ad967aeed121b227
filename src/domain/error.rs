use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for tgnav operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Binary is not resolvable on the executable search path.
    #[error("Command not found: {tool}")]
    ToolNotFound { tool: String },

    /// External process, object store, or lock table call failed.
    #[error("{system} call failed: {details}")]
    ExternalCall { system: String, details: String },

    /// Backend parameters for the module are incomplete.
    #[error("Remote backend is not configured for module '{module}'")]
    BackendNotConfigured { module: String },

    /// Machine-readable output could not be interpreted.
    #[error("Failed to parse {what}: {details}")]
    MalformedOutput { what: String, details: String },

    /// Module directory does not exist or is not a directory.
    #[error("Module directory not found: {}", .0.display())]
    ModuleNotFound(PathBuf),

    /// Interactive prompt failed (terminal closed, not a TTY, ...).
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Version-control staging failed.
    #[error("Version control error: {0}")]
    VersionControl(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn external<S: Into<String>, D: ToString>(system: S, details: D) -> Self {
        AppError::ExternalCall { system: system.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::MalformedOutput { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::ToolNotFound { .. } | AppError::ModuleNotFound(_) => io::ErrorKind::NotFound,
            AppError::BackendNotConfigured { .. } => io::ErrorKind::Unsupported,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::ExternalCall { .. } | AppError::VersionControl(_) => io::ErrorKind::Other,
        }
    }
}
