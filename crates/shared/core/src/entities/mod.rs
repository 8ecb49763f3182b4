mod deal;
mod symbol_status;
mod trading_symbol;

pub use deal::{Deal, DealId, DealPrediction};
pub use symbol_status::SymbolStatus;
pub use trading_symbol::{AGGREGATE_BALANCE_SYMBOL, DEFAULT_SYMBOL_LIMIT, TradingSymbol};
