use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading status of a symbol
///
/// There is no stopped state: stopping a symbol removes its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolStatus {
    /// Symbol has been registered but trading has not begun
    #[default]
    Preparing,
    /// Symbol is trading
    Active,
    /// Trading is paused until resumed
    Suspended,
}

impl SymbolStatus {
    /// Returns true if the symbol is currently trading
    pub fn is_active(&self) -> bool {
        matches!(self, SymbolStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolStatus::Preparing => "PREPARING",
            SymbolStatus::Active => "ACTIVE",
            SymbolStatus::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for SymbolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_display() {
        for status in [
            SymbolStatus::Preparing,
            SymbolStatus::Active,
            SymbolStatus::Suspended,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_default_is_preparing() {
        assert_eq!(SymbolStatus::default(), SymbolStatus::Preparing);
        assert!(!SymbolStatus::default().is_active());
    }
}
