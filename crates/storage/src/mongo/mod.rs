//! MongoDB-backed repositories
//!
//! Each entity lives in its own collection, keyed by `_id`. Writes are
//! `replace_one` with upsert, so a save is a single atomic document write.

mod deal_repository;
mod documents;
mod symbol_repository;

pub use deal_repository::MongoDealRepository;
pub use documents::{DealDocument, PredictionDocument, SymbolDocument};
pub use symbol_repository::MongoSymbolRepository;

use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Client, Database};
use tracing::info;
use warden_ports::{StorageError, StorageResult};

pub const SYMBOLS_COLLECTION: &str = "symbols";
pub const DEALS_COLLECTION: &str = "deals";

/// Connected handle to the Warden database
#[derive(Clone)]
pub struct MongoStorage {
    database: Database,
}

impl MongoStorage {
    /// Connect to `uri` and verify the server answers a ping
    pub async fn connect(uri: &str, database: &str) -> StorageResult<Self> {
        info!("Connecting to document store at {}", uri);

        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        let storage = Self::with_database(client.database(database));

        storage
            .database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        info!("Connected to database '{}'", database);
        Ok(storage)
    }

    /// Wrap an already connected database handle
    pub fn with_database(database: Database) -> Self {
        Self { database }
    }

    pub fn symbols(&self) -> MongoSymbolRepository {
        MongoSymbolRepository::new(self.database.collection(SYMBOLS_COLLECTION))
    }

    pub fn deals(&self) -> MongoDealRepository {
        MongoDealRepository::new(self.database.collection(DEALS_COLLECTION))
    }

    /// Drop both collections (used before seeding the starter set)
    pub async fn reset(&self) -> StorageResult<()> {
        for name in [SYMBOLS_COLLECTION, DEALS_COLLECTION] {
            self.database
                .collection::<mongodb::bson::Document>(name)
                .drop()
                .await
                .map_err(|e| map_error(name, e))?;
        }
        info!("Dropped collections '{}' and '{}'", SYMBOLS_COLLECTION, DEALS_COLLECTION);
        Ok(())
    }
}

/// Translate a driver error into the opaque storage error
pub(crate) fn map_error(collection: &str, err: MongoError) -> StorageError {
    match err.kind.as_ref() {
        ErrorKind::BsonDeserialization(e) => StorageError::Decode {
            collection: collection.to_string(),
            reason: e.to_string(),
        },
        ErrorKind::BsonSerialization(e) => StorageError::Encode {
            collection: collection.to_string(),
            reason: e.to_string(),
        },
        _ => StorageError::Backend(err.to_string()),
    }
}
