//! Starter data for a fresh database
//!
//! Bootstrap convenience only: four active symbols and three open deals.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use tracing::info;
use warden_core::{DEFAULT_SYMBOL_LIMIT, Deal, DealPrediction, SymbolStatus, TradingSymbol};
use warden_ports::{DealRepository, StorageResult, SymbolRepository};

pub fn starter_symbols() -> Vec<TradingSymbol> {
    vec![
        TradingSymbol::new("adausdt", SymbolStatus::Active, dec!(55), DEFAULT_SYMBOL_LIMIT),
        TradingSymbol::new("linkusdt", SymbolStatus::Active, dec!(66), DEFAULT_SYMBOL_LIMIT),
        TradingSymbol::new("zilusdt", SymbolStatus::Active, dec!(33), DEFAULT_SYMBOL_LIMIT),
        TradingSymbol::new("ltcusdt", SymbolStatus::Active, dec!(22), DEFAULT_SYMBOL_LIMIT),
    ]
}

pub fn starter_deals(now: DateTime<Utc>) -> Vec<Deal> {
    vec![
        Deal::open(
            "adausdt",
            now,
            dec!(0.01),
            dec!(361),
            DealPrediction::new(dec!(-3), dec!(2)),
        )
        .with_id("adausdt-1657483456")
        .with_delta(dec!(-12), dec!(-2)),
        Deal::open(
            "adausdt",
            now,
            dec!(0.04),
            dec!(734),
            DealPrediction::new(dec!(-5), dec!(7)),
        )
        .with_id("adausdt-1630958723")
        .with_delta(dec!(15), dec!(2)),
        Deal::open(
            "linkusdt",
            now,
            dec!(0.05),
            dec!(154),
            DealPrediction::new(dec!(-15), dec!(3)),
        )
        .with_id("linkusdt-3492445345")
        .with_delta(dec!(7), dec!(5)),
    ]
}

/// Upsert the starter set through the repository ports
pub async fn seed_starter_set(
    symbols: &dyn SymbolRepository,
    deals: &dyn DealRepository,
) -> StorageResult<()> {
    let starter_symbols = starter_symbols();
    let starter_deals = starter_deals(Utc::now());
    let (symbol_count, deal_count) = (starter_symbols.len(), starter_deals.len());

    for symbol in starter_symbols {
        symbols.save(symbol).await?;
    }
    for deal in starter_deals {
        deals.save(deal).await?;
    }

    info!("Seeded {} symbols and {} deals", symbol_count, deal_count);
    Ok(())
}
