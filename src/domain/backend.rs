//! Remote backend parameters derived from a module's rendered configuration.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Backend kind string used by the object-storage backend.
pub const S3_BACKEND: &str = "s3";

/// Remote backend for the module under the cursor.
///
/// Either fully populated or empty: there is no partially configured state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum BackendConfig {
    #[default]
    None,
    S3(S3Backend),
}

impl BackendConfig {
    /// Parse the JSON written by the render-json subcommand.
    pub fn from_render_json(raw: &str) -> Result<Self, AppError> {
        let rendered: RenderedConfig = serde_json::from_str(raw).map_err(|e| {
            AppError::MalformedOutput { what: "rendered configuration".into(), details: e.to_string() }
        })?;
        Ok(rendered.into_backend())
    }

    /// Whether backend-dependent actions may be offered.
    pub fn is_ready(&self) -> bool {
        matches!(self, BackendConfig::S3(_))
    }

    pub fn s3(&self) -> Option<&S3Backend> {
        match self {
            BackendConfig::S3(backend) => Some(backend),
            BackendConfig::None => None,
        }
    }
}

/// S3 state object plus its DynamoDB lock entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct S3Backend {
    bucket: String,
    key: String,
    lock_table: String,
    lock_id: String,
    state_path: String,
}

impl S3Backend {
    /// Returns `None` unless bucket, key, and lock table are all non-empty.
    pub fn new(bucket: &str, key: &str, lock_table: &str) -> Option<Self> {
        if bucket.is_empty() || key.is_empty() || lock_table.is_empty() {
            return None;
        }
        Some(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            lock_table: lock_table.to_string(),
            lock_id: format!("{}/{}-md5", bucket, key),
            state_path: format!("s3://{}/{}", bucket, key),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key of the state file.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn lock_table(&self) -> &str {
        &self.lock_table
    }

    /// Partition key value (`LockID`) of the module's lock entry.
    pub fn lock_id(&self) -> &str {
        &self.lock_id
    }

    /// `s3://bucket/key` form of the state location.
    pub fn state_path(&self) -> &str {
        &self.state_path
    }

    /// Key the state will live under after the module moves.
    ///
    /// Every occurrence of `from` in the key is replaced textually; a module path
    /// that also appears elsewhere in the key is rewritten there too.
    pub fn relocated_key(&self, from: &str, to: &str) -> String {
        self.key.replace(from, to)
    }
}

#[derive(Debug, Deserialize)]
struct RenderedConfig {
    #[serde(default)]
    remote_state: Option<RemoteState>,
}

#[derive(Debug, Deserialize)]
struct RemoteState {
    #[serde(default)]
    backend: Option<String>,
    #[serde(default)]
    config: Option<RemoteStateConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct RemoteStateConfig {
    #[serde(default)]
    bucket: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    dynamodb_table: Option<String>,
}

impl RenderedConfig {
    fn into_backend(self) -> BackendConfig {
        let Some(remote_state) = self.remote_state else {
            return BackendConfig::None;
        };
        if remote_state.backend.as_deref() != Some(S3_BACKEND) {
            return BackendConfig::None;
        }
        let config = remote_state.config.unwrap_or_default();
        S3Backend::new(
            config.bucket.as_deref().unwrap_or_default(),
            config.key.as_deref().unwrap_or_default(),
            config.dynamodb_table.as_deref().unwrap_or_default(),
        )
        .map_or(BackendConfig::None, BackendConfig::S3)
    }
}
