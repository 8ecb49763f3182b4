pub mod access;
pub mod deals;
pub mod service;
pub mod symbols;

pub use access::{AccessGate, Role, UserId};
pub use deals::{DealLedger, DealSelection};
pub use service::WardenService;
pub use symbols::{SymbolBalance, SymbolLifecycleManager, SymbolLimit, SymbolSummary};
