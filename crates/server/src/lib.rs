//! Warden
//!
//! Trading-symbol and deal lifecycle manager for an automated trading desk.
//!
//! # Architecture
//!
//! - **Application**: access gate, symbol lifecycle, deal ledger and the
//!   `WardenService` facade every transport goes through
//! - **Config**: JSON configuration with CLI / environment overrides
//! - **Presentation**: REST API (axum)
//! - **Bootstrap**: storage selection, seeding and serving
//!
//! Storage is injected through the `warden-ports` traits; `warden-storage`
//! provides in-memory and MongoDB implementations.
//!
//! # Example
//!
//! ```ignore
//! use warden_server::{Warden, WardenConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let warden = Warden::from_config(WardenConfig::default()).await.unwrap();
//!     warden.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod presentation;

pub use application::{
    AccessGate, DealLedger, DealSelection, Role, SymbolBalance, SymbolLifecycleManager,
    SymbolLimit, SymbolSummary, UserId, WardenService,
};
pub use bootstrap::{BootstrapError, Warden};
pub use config::{ConfigError, ConfigOverrides, StorageBackend, WardenConfig};
pub use error::{Error, Result};
pub use presentation::{ApiError, AppState, create_router};
