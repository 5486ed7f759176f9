use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// An append-only store of timestamped records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creation time of the most recent record, or `None` when the store is empty.
    async fn latest_created_time(&self) -> Result<Option<DateTime<Utc>>>;

    async fn create_record(&self, title: &str) -> Result<()>;
}
