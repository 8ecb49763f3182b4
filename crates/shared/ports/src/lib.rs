//! Warden Ports
//!
//! Port definitions (traits) for the Warden service.
//! These define the boundary between the lifecycle managers and storage backends.

mod deal_repository;
mod error;
mod symbol_repository;

pub use deal_repository::DealRepository;
pub use error::{StorageError, StorageResult};
pub use symbol_repository::SymbolRepository;
