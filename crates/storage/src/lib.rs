//! Warden Storage
//!
//! Implementations of the persistence ports:
//! - `InMemorySymbolRepository` / `InMemoryDealRepository`: DashMap-backed, for tests and bootstrap
//! - `MongoSymbolRepository` / `MongoDealRepository`: document store with upsert-by-key writes
//!
//! Both families satisfy the same contract, so the lifecycle managers never know
//! which one is active.
//!
//! ## Layout
//!
//! ```text
//! database
//!   ├── symbols { _id: symbol, status, balance, limit }
//!   └── deals   { _id: deal id, symbol, created_at, amount, amount_currency,
//!                 delta_amount, delta_percent, prediction { stop, max } }
//! ```

pub mod mongo;
pub mod repositories;
pub mod seed;

pub use mongo::{MongoDealRepository, MongoStorage, MongoSymbolRepository};
pub use repositories::{InMemoryDealRepository, InMemorySymbolRepository};
pub use seed::seed_starter_set;
