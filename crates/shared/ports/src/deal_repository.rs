use async_trait::async_trait;
use warden_core::Deal;

use crate::error::StorageResult;

/// Repository for deals, keyed by deal id
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// Insert or replace the deal with the same id
    async fn save(&self, deal: Deal) -> StorageResult<()>;

    /// Get every deal (empty when none exist)
    async fn get_all(&self) -> StorageResult<Vec<Deal>>;

    /// Get a deal by id, `None` when absent
    async fn get(&self, id: &str) -> StorageResult<Option<Deal>>;

    /// Remove a deal; removing an absent id is not an error
    async fn delete(&self, id: &str) -> StorageResult<()>;
}
