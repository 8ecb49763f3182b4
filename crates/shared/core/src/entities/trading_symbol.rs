use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::SymbolStatus;

/// Trading cap assigned to a freshly prepared symbol
pub const DEFAULT_SYMBOL_LIMIT: Decimal = dec!(100);

/// Key of the synthetic entry that carries the sum of all symbol balances
pub const AGGREGATE_BALANCE_SYMBOL: &str = "usd";

/// A tradable symbol and its bookkeeping
///
/// `symbol` is the primary key and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingSymbol {
    pub symbol: String,
    pub status: SymbolStatus,
    /// Balance held, denominated in the symbol's own unit
    pub balance: Decimal,
    /// Configurable trading cap
    pub limit: Decimal,
}

impl TradingSymbol {
    /// Create a record with explicit values (seeding, restores)
    pub fn new(
        symbol: impl Into<String>,
        status: SymbolStatus,
        balance: Decimal,
        limit: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            status,
            balance,
            limit,
        }
    }

    /// Create a freshly prepared symbol: zero balance, given limit
    pub fn prepare(symbol: impl Into<String>, limit: Decimal) -> Self {
        Self::new(symbol, SymbolStatus::Preparing, Decimal::ZERO, limit)
    }

    pub fn with_status(mut self, status: SymbolStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_limit(mut self, limit: Decimal) -> Self {
        self.limit = limit;
        self
    }
}
