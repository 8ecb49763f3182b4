//! Symbol lifecycle
//!
//! ```text
//! (absent) --prepare--> PREPARING --start/resume--> ACTIVE
//! ACTIVE --suspend--> SUSPENDED --resume/start--> ACTIVE
//! PREPARING | ACTIVE | SUSPENDED --stop--> (absent)
//! ```
//!
//! Start and resume do not check the prior state. Every mutation is one
//! upsert or one delete against the repository.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use warden_core::{AGGREGATE_BALANCE_SYMBOL, SymbolStatus, TradingSymbol};
use warden_ports::SymbolRepository;

use crate::error::{Error, Result};

/// Symbol and its trading status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSummary {
    pub symbol: String,
    pub status: SymbolStatus,
}

/// Balance held for a symbol, or the aggregate `usd` total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolBalance {
    pub symbol: String,
    pub amount: Decimal,
}

/// Trading cap for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolLimit {
    pub symbol: String,
    pub limit: Decimal,
}

impl SymbolLimit {
    pub fn new(symbol: impl Into<String>, limit: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            limit,
        }
    }
}

pub struct SymbolLifecycleManager {
    repository: Arc<dyn SymbolRepository>,
    default_limit: Decimal,
}

impl SymbolLifecycleManager {
    pub fn new(repository: Arc<dyn SymbolRepository>, default_limit: Decimal) -> Self {
        Self {
            repository,
            default_limit,
        }
    }

    pub async fn prepare(&self, symbol: &str) -> Result<()> {
        if self.repository.get(symbol).await?.is_some() {
            return Err(Error::AlreadyTrading(symbol.to_string()));
        }

        self.repository
            .save(TradingSymbol::prepare(symbol, self.default_limit))
            .await?;

        info!("Prepared symbol '{}' with limit {}", symbol, self.default_limit);
        Ok(())
    }

    pub async fn start(&self, symbol: &str) -> Result<()> {
        self.set_status(symbol, SymbolStatus::Active).await
    }

    pub async fn resume(&self, symbol: &str) -> Result<()> {
        self.set_status(symbol, SymbolStatus::Active).await
    }

    pub async fn suspend(&self, symbol: &str) -> Result<()> {
        self.set_status(symbol, SymbolStatus::Suspended).await
    }

    /// Remove the symbol entirely; stopping an unknown symbol is an error
    pub async fn stop(&self, symbol: &str) -> Result<()> {
        self.require(symbol).await?;
        self.repository.delete(symbol).await?;

        info!("Stopped symbol '{}'", symbol);
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<SymbolSummary>> {
        let symbols = self.repository.get_all().await?;
        debug!("Listing {} symbols", symbols.len());

        Ok(symbols
            .into_iter()
            .map(|s| SymbolSummary {
                symbol: s.symbol,
                status: s.status,
            })
            .collect())
    }

    /// Per-symbol balances followed by the aggregate `usd` entry
    pub async fn balances(&self) -> Result<Vec<SymbolBalance>> {
        let symbols = self.repository.get_all().await?;
        let total: Decimal = symbols.iter().map(|s| s.balance).sum();

        let mut balances: Vec<SymbolBalance> = symbols
            .into_iter()
            .map(|s| SymbolBalance {
                symbol: s.symbol,
                amount: s.balance,
            })
            .collect();
        balances.push(SymbolBalance {
            symbol: AGGREGATE_BALANCE_SYMBOL.to_string(),
            amount: total,
        });

        Ok(balances)
    }

    pub async fn limits(&self) -> Result<Vec<SymbolLimit>> {
        let symbols = self.repository.get_all().await?;

        Ok(symbols
            .into_iter()
            .map(|s| SymbolLimit {
                symbol: s.symbol,
                limit: s.limit,
            })
            .collect())
    }

    /// Apply limits in order, stopping at the first unknown symbol
    ///
    /// Not atomic: assignments before the failing entry stay persisted.
    pub async fn set_limits(&self, limits: Vec<SymbolLimit>) -> Result<()> {
        for SymbolLimit { symbol, limit } in limits {
            let record = self.require(&symbol).await?;
            self.repository.save(record.with_limit(limit)).await?;
            info!("Set limit of '{}' to {}", symbol, limit);
        }
        Ok(())
    }

    async fn set_status(&self, symbol: &str, status: SymbolStatus) -> Result<()> {
        let record = self.require(symbol).await?;
        let previous = record.status;
        self.repository.save(record.with_status(status)).await?;

        info!("Symbol '{}' moved {} -> {}", symbol, previous, status);
        Ok(())
    }

    async fn require(&self, symbol: &str) -> Result<TradingSymbol> {
        self.repository
            .get(symbol)
            .await?
            .ok_or_else(|| Error::SymbolNotFound(symbol.to_string()))
    }
}
