//! Synchronous S3 and DynamoDB clients.
//!
//! The AWS SDK is async; every call is driven to completion on a private
//! current-thread runtime so callers stay blocking. The shared SDK
//! configuration (region, credentials chain) is loaded on first use, so
//! sessions that never touch the backend never resolve credentials.

mod dynamodb;
mod s3;

use std::future::Future;
use std::sync::{Arc, OnceLock};

use aws_config::{BehaviorVersion, SdkConfig};
use tokio::runtime::Runtime;

use crate::domain::AppError;

pub use dynamodb::DynamoDbLockTable;
pub use s3::S3ObjectStore;

/// Runtime plus lazily loaded SDK configuration shared by the AWS adapters.
pub struct AwsSession {
    runtime: Runtime,
    config: OnceLock<SdkConfig>,
}

impl std::fmt::Debug for AwsSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSession").field("loaded", &self.config.get().is_some()).finish()
    }
}

impl AwsSession {
    pub fn new() -> Result<Arc<Self>, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create async runtime: {}", e)))?;
        Ok(Arc::new(Self { runtime, config: OnceLock::new() }))
    }

    fn sdk_config(&self) -> &SdkConfig {
        self.config.get_or_init(|| {
            tracing::debug!("loading AWS configuration");
            self.runtime.block_on(aws_config::load_defaults(BehaviorVersion::latest()))
        })
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
