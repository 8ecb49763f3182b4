mod in_memory_deal;
mod in_memory_symbol;

pub use in_memory_deal::InMemoryDealRepository;
pub use in_memory_symbol::InMemorySymbolRepository;
