use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use warden_core::{Deal, DealId};
use warden_ports::{DealRepository, StorageResult};

/// In-memory deal repository
///
/// Thread-safe storage for deals using DashMap.
pub struct InMemoryDealRepository {
    deals: Arc<DashMap<DealId, Deal>>,
}

impl InMemoryDealRepository {
    pub fn new() -> Self {
        Self {
            deals: Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

impl Default for InMemoryDealRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryDealRepository {
    fn clone(&self) -> Self {
        Self {
            deals: Arc::clone(&self.deals),
        }
    }
}

#[async_trait]
impl DealRepository for InMemoryDealRepository {
    async fn save(&self, deal: Deal) -> StorageResult<()> {
        self.deals.insert(deal.id.clone(), deal);
        Ok(())
    }

    async fn get_all(&self) -> StorageResult<Vec<Deal>> {
        let mut deals: Vec<Deal> = self.deals.iter().map(|d| d.value().clone()).collect();
        deals.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(deals)
    }

    async fn get(&self, id: &str) -> StorageResult<Option<Deal>> {
        Ok(self.deals.get(id).map(|d| d.value().clone()))
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.deals.remove(id);
        Ok(())
    }
}
