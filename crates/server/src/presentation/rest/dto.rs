use serde::{Deserialize, Serialize};
use warden_core::DealId;

use crate::application::{DealSelection, SymbolLimit};

/// Body of `PUT /api/v1/limits`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetLimitsRequest {
    #[serde(default)]
    pub limits: Vec<SymbolLimit>,
}

/// Query of `GET /api/v1/deals/active`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveDealsQuery {
    #[serde(default)]
    pub all: bool,
    /// Comma-separated deal ids
    #[serde(default)]
    pub deal_ids: Option<String>,
}

impl ActiveDealsQuery {
    pub fn selection(&self) -> DealSelection {
        let ids = self
            .deal_ids
            .as_deref()
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        DealSelection::from_flag(self.all, ids)
    }
}

/// Body of `POST /api/v1/deals/close`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CloseDealsRequest {
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub deal_ids: Vec<DealId>,
}

impl CloseDealsRequest {
    pub fn into_selection(self) -> DealSelection {
        DealSelection::from_flag(self.all, self.deal_ids)
    }
}

/// Empty acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct EmptyResponse {}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<String>,
}
