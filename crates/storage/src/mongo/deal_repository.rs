use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use warden_core::Deal;
use warden_ports::{DealRepository, StorageResult};

use super::documents::DealDocument;
use super::{DEALS_COLLECTION, map_error};

/// Deal repository over the `deals` collection
#[derive(Clone)]
pub struct MongoDealRepository {
    collection: Collection<DealDocument>,
}

impl MongoDealRepository {
    pub fn new(collection: Collection<DealDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl DealRepository for MongoDealRepository {
    async fn save(&self, deal: Deal) -> StorageResult<()> {
        let document = DealDocument::from(deal);

        self.collection
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .await
            .map_err(|e| map_error(DEALS_COLLECTION, e))?;
        Ok(())
    }

    async fn get_all(&self) -> StorageResult<Vec<Deal>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| map_error(DEALS_COLLECTION, e))?;

        let documents: Vec<DealDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| map_error(DEALS_COLLECTION, e))?;

        documents.into_iter().map(Deal::try_from).collect()
    }

    async fn get(&self, id: &str) -> StorageResult<Option<Deal>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| map_error(DEALS_COLLECTION, e))?;

        document.map(Deal::try_from).transpose()
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| map_error(DEALS_COLLECTION, e))?;
        Ok(())
    }
}
