//! Warden Core Domain
//!
//! Pure domain types for the Warden symbol and deal manager.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;

// Re-export commonly used types at crate root
pub use entities::{
    // Symbols
    AGGREGATE_BALANCE_SYMBOL,
    DEFAULT_SYMBOL_LIMIT,
    // Deals
    Deal,
    DealId,
    DealPrediction,
    SymbolStatus,
    TradingSymbol,
};
