use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use warden_core::TradingSymbol;
use warden_ports::{StorageResult, SymbolRepository};

/// In-memory symbol repository
///
/// Thread-safe storage for symbols using DashMap.
/// Suitable for testing and local bootstrap.
pub struct InMemorySymbolRepository {
    /// Symbols by key
    symbols: Arc<DashMap<String, TradingSymbol>>,
}

impl InMemorySymbolRepository {
    pub fn new() -> Self {
        Self {
            symbols: Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for InMemorySymbolRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemorySymbolRepository {
    fn clone(&self) -> Self {
        Self {
            symbols: Arc::clone(&self.symbols),
        }
    }
}

#[async_trait]
impl SymbolRepository for InMemorySymbolRepository {
    async fn save(&self, symbol: TradingSymbol) -> StorageResult<()> {
        self.symbols.insert(symbol.symbol.clone(), symbol);
        Ok(())
    }

    async fn get_all(&self) -> StorageResult<Vec<TradingSymbol>> {
        let mut symbols: Vec<TradingSymbol> =
            self.symbols.iter().map(|s| s.value().clone()).collect();
        // DashMap iteration order is shard-dependent
        symbols.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(symbols)
    }

    async fn get(&self, symbol: &str) -> StorageResult<Option<TradingSymbol>> {
        Ok(self.symbols.get(symbol).map(|s| s.value().clone()))
    }

    async fn delete(&self, symbol: &str) -> StorageResult<()> {
        self.symbols.remove(symbol);
        Ok(())
    }
}
