use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier for a deal, conventionally `{symbol}-{unix_seconds}`
pub type DealId = String;

/// Projected downside/upside bounds of a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DealPrediction {
    pub stop: Decimal,
    pub max: Decimal,
}

impl DealPrediction {
    pub fn new(stop: Decimal, max: Decimal) -> Self {
        Self { stop, max }
    }
}

/// An open deal on a symbol
///
/// Deals are immutable once created; the only change is deletion.
/// `symbol` is not checked against existing trading symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
    pub amount: Decimal,
    pub amount_currency: Decimal,
    pub delta_amount: Decimal,
    pub delta_percent: Decimal,
    pub prediction: DealPrediction,
}

impl Deal {
    /// Open a deal on `symbol` at `created_at`, deriving the id from both
    ///
    /// `created_at` is truncated to milliseconds, the finest precision every
    /// store keeps.
    pub fn open(
        symbol: impl Into<String>,
        created_at: DateTime<Utc>,
        amount: Decimal,
        amount_currency: Decimal,
        prediction: DealPrediction,
    ) -> Self {
        let symbol = symbol.into();
        let created_at = created_at.trunc_subsecs(3);
        Self {
            id: Self::derive_id(&symbol, created_at),
            symbol,
            created_at,
            amount,
            amount_currency,
            delta_amount: Decimal::ZERO,
            delta_percent: Decimal::ZERO,
            prediction,
        }
    }

    /// Id convention: `{symbol}-{unix_seconds}`
    pub fn derive_id(symbol: &str, created_at: DateTime<Utc>) -> DealId {
        format!("{}-{}", symbol, created_at.timestamp())
    }

    pub fn with_id(mut self, id: impl Into<DealId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_delta(mut self, delta_amount: Decimal, delta_percent: Decimal) -> Self {
        self.delta_amount = delta_amount;
        self.delta_percent = delta_percent;
        self
    }
}
