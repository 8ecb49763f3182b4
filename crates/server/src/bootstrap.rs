//! Bootstrap - storage selection and service wiring
//!
//! Turns a resolved `WardenConfig` into a running service:
//! - Connecting the configured storage backend
//! - Optionally resetting and seeding it with the starter set
//! - Building the access gate and service facade
//! - Serving the REST router

use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use warden_ports::{DealRepository, StorageError, SymbolRepository};
use warden_storage::{
    InMemoryDealRepository, InMemorySymbolRepository, MongoStorage, seed_starter_set,
};

use crate::application::{AccessGate, WardenService};
use crate::config::{ConfigError, StorageBackend, WardenConfig};
use crate::presentation::{AppState, create_router};

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Storage initialization failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to serve on {addr}: {source}")]
    Serve {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// A wired Warden service, ready to serve
pub struct Warden {
    pub config: WardenConfig,
    service: Arc<WardenService>,
}

impl Warden {
    /// Build storage, seed if requested, then wire the service
    pub async fn from_config(config: WardenConfig) -> Result<Self, BootstrapError> {
        let (symbols, deals): (Arc<dyn SymbolRepository>, Arc<dyn DealRepository>) =
            match config.storage.backend {
                StorageBackend::Memory => {
                    info!("Using in-memory storage");
                    (
                        Arc::new(InMemorySymbolRepository::new()),
                        Arc::new(InMemoryDealRepository::new()),
                    )
                }
                StorageBackend::Mongo => {
                    info!(
                        "Connecting to MongoDB database '{}'",
                        config.storage.database
                    );
                    let storage =
                        MongoStorage::connect(&config.storage.mongo_uri, &config.storage.database)
                            .await?;
                    if config.storage.seed {
                        storage.reset().await?;
                    }
                    (Arc::new(storage.symbols()), Arc::new(storage.deals()))
                }
            };

        if config.storage.seed {
            seed_starter_set(symbols.as_ref(), deals.as_ref()).await?;
        }

        Ok(Self::with_repositories(config, symbols, deals))
    }

    /// Wire the service over already-built repositories
    pub fn with_repositories(
        config: WardenConfig,
        symbols: Arc<dyn SymbolRepository>,
        deals: Arc<dyn DealRepository>,
    ) -> Self {
        let gate = AccessGate::new(
            config.access.operators.iter().copied(),
            config.access.viewers.iter().copied(),
        );
        info!(
            "Access gate: {} operators, {} viewers",
            gate.operator_count(),
            gate.viewer_count()
        );

        let service = Arc::new(WardenService::new(gate, symbols, deals, &config.symbols));

        Warden { config, service }
    }

    pub fn service(&self) -> &Arc<WardenService> {
        &self.service
    }

    /// Create the REST API router
    pub fn router(&self) -> Router {
        create_router(Arc::new(AppState::new(Arc::clone(&self.service))))
    }

    /// Run the server until the listener fails
    pub async fn run(self) -> Result<(), BootstrapError> {
        let addr = self.config.server.addr();
        let router = self.router();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| BootstrapError::Serve {
                addr: addr.clone(),
                source,
            })?;
        info!("Warden listening on {}", addr);

        axum::serve(listener, router)
            .await
            .map_err(|source| BootstrapError::Serve { addr, source })?;

        Ok(())
    }
}
