use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use tracing::debug;
use warden_core::TradingSymbol;
use warden_ports::{StorageResult, SymbolRepository};

use super::documents::SymbolDocument;
use super::{SYMBOLS_COLLECTION, map_error};

/// Symbol repository over the `symbols` collection
#[derive(Clone)]
pub struct MongoSymbolRepository {
    collection: Collection<SymbolDocument>,
}

impl MongoSymbolRepository {
    pub fn new(collection: Collection<SymbolDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl SymbolRepository for MongoSymbolRepository {
    async fn save(&self, symbol: TradingSymbol) -> StorageResult<()> {
        let document = SymbolDocument::from(symbol);
        debug!("Upserting symbol '{}'", document.symbol);

        self.collection
            .replace_one(doc! { "_id": document.symbol.as_str() }, &document)
            .upsert(true)
            .await
            .map_err(|e| map_error(SYMBOLS_COLLECTION, e))?;
        Ok(())
    }

    async fn get_all(&self) -> StorageResult<Vec<TradingSymbol>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| map_error(SYMBOLS_COLLECTION, e))?;

        let documents: Vec<SymbolDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| map_error(SYMBOLS_COLLECTION, e))?;

        Ok(documents.into_iter().map(TradingSymbol::from).collect())
    }

    async fn get(&self, symbol: &str) -> StorageResult<Option<TradingSymbol>> {
        let document = self
            .collection
            .find_one(doc! { "_id": symbol })
            .await
            .map_err(|e| map_error(SYMBOLS_COLLECTION, e))?;

        Ok(document.map(TradingSymbol::from))
    }

    async fn delete(&self, symbol: &str) -> StorageResult<()> {
        self.collection
            .delete_one(doc! { "_id": symbol })
            .await
            .map_err(|e| map_error(SYMBOLS_COLLECTION, e))?;
        Ok(())
    }
}
