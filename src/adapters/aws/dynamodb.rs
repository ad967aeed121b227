use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use super::AwsSession;
use crate::domain::AppError;
use crate::ports::{LockEntry, LockTable};

const SYSTEM: &str = "DynamoDB";
const LOCK_ID: &str = "LockID";

/// [`LockTable`] backed by an Amazon DynamoDB table with a `LockID` partition key.
#[derive(Debug)]
pub struct DynamoDbLockTable {
    session: Arc<AwsSession>,
    client: OnceLock<Client>,
}

impl DynamoDbLockTable {
    pub fn new(session: Arc<AwsSession>) -> Self {
        Self { session, client: OnceLock::new() }
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(|| Client::new(self.session.sdk_config()))
    }
}

impl LockTable for DynamoDbLockTable {
    fn get_lock(&self, table: &str, lock_id: &str) -> Result<Option<LockEntry>, AppError> {
        debug!(table, lock_id, "reading lock entry");
        let client = self.client();
        let output = self.session.block_on(async {
            client
                .get_item()
                .table_name(table)
                .key(LOCK_ID, AttributeValue::S(lock_id.to_string()))
                .consistent_read(true)
                .send()
                .await
                .map_err(|e| AppError::external(SYSTEM, DisplayErrorContext(&e)))
        })?;

        Ok(output.item().map(|item| LockEntry {
            lock_id: lock_id.to_string(),
            attributes: item
                .iter()
                .filter(|(name, _)| name.as_str() != LOCK_ID)
                .map(|(name, value)| (name.clone(), render_attribute(value)))
                .collect::<BTreeMap<_, _>>(),
        }))
    }

    fn delete_lock(&self, table: &str, lock_id: &str) -> Result<(), AppError> {
        debug!(table, lock_id, "deleting lock entry");
        let client = self.client();
        self.session.block_on(async {
            client
                .delete_item()
                .table_name(table)
                .key(LOCK_ID, AttributeValue::S(lock_id.to_string()))
                .send()
                .await
                .map_err(|e| AppError::external(SYSTEM, DisplayErrorContext(&e)))?;
            Ok::<_, AppError>(())
        })
    }
}

fn render_attribute(value: &AttributeValue) -> String {
    match value {
        AttributeValue::S(text) => text.clone(),
        AttributeValue::N(number) => number.clone(),
        AttributeValue::Bool(flag) => flag.to_string(),
        other => format!("{:?}", other),
    }
}
