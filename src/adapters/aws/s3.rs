use std::sync::{Arc, OnceLock};

use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use super::AwsSession;
use crate::domain::AppError;
use crate::ports::ObjectStore;

const SYSTEM: &str = "S3";

/// Everything except RFC 3986 unreserved characters is escaped.
const KEY_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// `CopySource` value for `bucket`/`key`: URL-encoded per key segment, `/` kept.
pub fn copy_source(bucket: &str, key: &str) -> String {
    let key: Vec<String> =
        key.split('/').map(|segment| utf8_percent_encode(segment, KEY_SEGMENT).to_string()).collect();
    format!("{}/{}", bucket, key.join("/"))
}

/// [`ObjectStore`] backed by Amazon S3.
#[derive(Debug)]
pub struct S3ObjectStore {
    session: Arc<AwsSession>,
    client: OnceLock<Client>,
}

impl S3ObjectStore {
    pub fn new(session: Arc<AwsSession>) -> Self {
        Self { session, client: OnceLock::new() }
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(|| Client::new(self.session.sdk_config()))
    }
}

impl ObjectStore for S3ObjectStore {
    fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, AppError> {
        debug!(bucket, prefix, "listing objects");
        let client = self.client();
        self.session.block_on(async {
            let mut pages =
                client.list_objects_v2().bucket(bucket).prefix(prefix).into_paginator().send();
            let mut keys = Vec::new();
            while let Some(page) = pages.next().await {
                let page =
                    page.map_err(|e| AppError::external(SYSTEM, DisplayErrorContext(&e)))?;
                keys.extend(page.contents().iter().filter_map(|object| object.key()).map(str::to_string));
            }
            Ok::<_, AppError>(keys)
        })
    }

    fn copy_object(&self, bucket: &str, from_key: &str, to_key: &str) -> Result<(), AppError> {
        debug!(bucket, from_key, to_key, "copying object");
        let client = self.client();
        self.session.block_on(async {
            client
                .copy_object()
                .bucket(bucket)
                .copy_source(copy_source(bucket, from_key))
                .key(to_key)
                .send()
                .await
                .map_err(|e| AppError::external(SYSTEM, DisplayErrorContext(&e)))?;
            Ok::<_, AppError>(())
        })
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<(), AppError> {
        debug!(bucket, key, "deleting object");
        let client = self.client();
        self.session.block_on(async {
            client
                .delete_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| AppError::external(SYSTEM, DisplayErrorContext(&e)))?;
            Ok::<_, AppError>(())
        })
    }
}
