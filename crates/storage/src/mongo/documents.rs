//! Persisted document shapes
//!
//! Kept apart from the domain types so the storage layout (`_id` keys, BSON
//! dates) never leaks into the managers. Decimals are stored as strings.

use chrono::{TimeZone, Utc};
use mongodb::bson::DateTime as BsonDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use warden_core::{Deal, DealPrediction, SymbolStatus, TradingSymbol};
use warden_ports::StorageError;

use super::DEALS_COLLECTION;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDocument {
    #[serde(rename = "_id")]
    pub symbol: String,
    pub status: SymbolStatus,
    pub balance: Decimal,
    pub limit: Decimal,
}

impl From<TradingSymbol> for SymbolDocument {
    fn from(symbol: TradingSymbol) -> Self {
        Self {
            symbol: symbol.symbol,
            status: symbol.status,
            balance: symbol.balance,
            limit: symbol.limit,
        }
    }
}

impl From<SymbolDocument> for TradingSymbol {
    fn from(doc: SymbolDocument) -> Self {
        TradingSymbol::new(doc.symbol, doc.status, doc.balance, doc.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionDocument {
    pub stop: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub symbol: String,
    pub created_at: BsonDateTime,
    pub amount: Decimal,
    pub amount_currency: Decimal,
    pub delta_amount: Decimal,
    pub delta_percent: Decimal,
    pub prediction: PredictionDocument,
}

impl From<Deal> for DealDocument {
    fn from(deal: Deal) -> Self {
        Self {
            id: deal.id,
            symbol: deal.symbol,
            created_at: BsonDateTime::from_millis(deal.created_at.timestamp_millis()),
            amount: deal.amount,
            amount_currency: deal.amount_currency,
            delta_amount: deal.delta_amount,
            delta_percent: deal.delta_percent,
            prediction: PredictionDocument {
                stop: deal.prediction.stop,
                max: deal.prediction.max,
            },
        }
    }
}

impl TryFrom<DealDocument> for Deal {
    type Error = StorageError;

    fn try_from(doc: DealDocument) -> Result<Self, Self::Error> {
        let millis = doc.created_at.timestamp_millis();
        let created_at = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| StorageError::Decode {
                collection: DEALS_COLLECTION.to_string(),
                reason: format!("created_at out of range for deal '{}': {}", doc.id, millis),
            })?;

        Ok(Deal {
            id: doc.id,
            symbol: doc.symbol,
            created_at,
            amount: doc.amount,
            amount_currency: doc.amount_currency,
            delta_amount: doc.delta_amount,
            delta_percent: doc.delta_percent,
            prediction: DealPrediction::new(doc.prediction.stop, doc.prediction.max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Bson, from_document, to_document};
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_document_keyed_by_id() {
        let symbol = TradingSymbol::new("adausdt", SymbolStatus::Active, dec!(55), dec!(100));

        let doc = to_document(&SymbolDocument::from(symbol.clone())).unwrap();

        assert_eq!(doc.get_str("_id").unwrap(), "adausdt");
        assert_eq!(doc.get_str("status").unwrap(), "ACTIVE");
        assert!(!doc.contains_key("symbol"));

        let back: SymbolDocument = from_document(doc).unwrap();
        assert_eq!(TradingSymbol::from(back), symbol);
    }

    #[test]
    fn test_deal_document_uses_bson_date() {
        let created_at = Utc.timestamp_opt(1_657_483_456, 0).unwrap();
        let deal = Deal::open(
            "adausdt",
            created_at,
            dec!(0.01),
            dec!(361),
            DealPrediction::new(dec!(-3), dec!(2)),
        )
        .with_delta(dec!(-12), dec!(-2));

        let doc = to_document(&DealDocument::from(deal.clone())).unwrap();

        assert_eq!(doc.get_str("_id").unwrap(), "adausdt-1657483456");
        assert!(matches!(doc.get("created_at"), Some(Bson::DateTime(_))));
        assert!(doc.get_document("prediction").is_ok());

        let back: DealDocument = from_document(doc).unwrap();
        assert_eq!(Deal::try_from(back).unwrap(), deal);
    }

    #[test]
    fn test_deal_round_trip_keeps_sub_second_time() {
        let created_at = Utc.timestamp_opt(1_657_483_456, 123_456_789).unwrap();
        let deal = Deal::open(
            "adausdt",
            created_at,
            dec!(0.01),
            dec!(361),
            DealPrediction::new(dec!(-3), dec!(2)),
        );

        let doc = to_document(&DealDocument::from(deal.clone())).unwrap();
        let back = Deal::try_from(from_document::<DealDocument>(doc).unwrap()).unwrap();

        assert_eq!(back, deal);
        assert_eq!(back.created_at.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_starter_deals_survive_the_document_layout() {
        for deal in crate::seed::starter_deals(Utc::now()) {
            let back = Deal::try_from(DealDocument::from(deal.clone())).unwrap();
            assert_eq!(back, deal);
        }
    }
}
