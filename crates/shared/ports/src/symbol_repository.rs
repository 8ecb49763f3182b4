use async_trait::async_trait;
use warden_core::TradingSymbol;

use crate::error::StorageResult;

/// Repository for trading symbols, keyed by `symbol`
///
/// Implementations:
/// - In-memory map for tests and bootstrap
/// - Document store with upsert-by-key writes
#[async_trait]
pub trait SymbolRepository: Send + Sync {
    /// Insert or replace the record with the same symbol
    async fn save(&self, symbol: TradingSymbol) -> StorageResult<()>;

    /// Get every symbol (empty when none exist)
    async fn get_all(&self) -> StorageResult<Vec<TradingSymbol>>;

    /// Get a symbol by key, `None` when absent
    async fn get(&self, symbol: &str) -> StorageResult<Option<TradingSymbol>>;

    /// Remove a symbol; removing an absent key is not an error
    async fn delete(&self, symbol: &str) -> StorageResult<()>;
}
