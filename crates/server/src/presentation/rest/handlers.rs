use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use std::sync::Arc;
use warden_core::Deal;

use crate::application::{SymbolBalance, SymbolLimit, SymbolSummary, UserId};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// Header carrying the caller's numeric user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Symbols

/// GET /api/v1/symbols
pub async fn list_symbols(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SymbolSummary>>, ApiError> {
    let caller = extract_caller(&headers)?;
    Ok(Json(state.service.list_symbols(caller).await?))
}

/// POST /api/v1/symbols/{symbol}/prepare
pub async fn prepare_symbol(
    headers: HeaderMap,
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let caller = extract_caller(&headers)?;
    state.service.prepare_symbol(caller, &symbol).await?;
    Ok(Json(EmptyResponse {}))
}

/// POST /api/v1/symbols/{symbol}/start
pub async fn start_symbol(
    headers: HeaderMap,
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let caller = extract_caller(&headers)?;
    state.service.start_symbol(caller, &symbol).await?;
    Ok(Json(EmptyResponse {}))
}

/// POST /api/v1/symbols/{symbol}/stop
pub async fn stop_symbol(
    headers: HeaderMap,
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let caller = extract_caller(&headers)?;
    state.service.stop_symbol(caller, &symbol).await?;
    Ok(Json(EmptyResponse {}))
}

/// POST /api/v1/symbols/{symbol}/suspend
pub async fn suspend_symbol(
    headers: HeaderMap,
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let caller = extract_caller(&headers)?;
    state.service.suspend_symbol(caller, &symbol).await?;
    Ok(Json(EmptyResponse {}))
}

/// POST /api/v1/symbols/{symbol}/resume
pub async fn resume_symbol(
    headers: HeaderMap,
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let caller = extract_caller(&headers)?;
    state.service.resume_symbol(caller, &symbol).await?;
    Ok(Json(EmptyResponse {}))
}

/// GET /api/v1/balances
pub async fn get_balances(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SymbolBalance>>, ApiError> {
    let caller = extract_caller(&headers)?;
    Ok(Json(state.service.get_balances(caller).await?))
}

/// GET /api/v1/limits
pub async fn get_limits(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SymbolLimit>>, ApiError> {
    let caller = extract_caller(&headers)?;
    Ok(Json(state.service.get_limits(caller).await?))
}

/// PUT /api/v1/limits
pub async fn set_limits(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetLimitsRequest>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let caller = extract_caller(&headers)?;
    state.service.set_limits(caller, req.limits).await?;
    Ok(Json(EmptyResponse {}))
}

// Deals

/// GET /api/v1/deals/active
pub async fn list_active_deals(
    headers: HeaderMap,
    Query(query): Query<ActiveDealsQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Deal>>, ApiError> {
    let caller = extract_caller(&headers)?;
    let deals = state
        .service
        .list_active_deals(caller, query.selection())
        .await?;
    Ok(Json(deals))
}

/// GET /api/v1/deals/potential
pub async fn list_potential_deals(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Deal>>, ApiError> {
    let caller = extract_caller(&headers)?;
    Ok(Json(state.service.list_potential_deals(caller).await?))
}

/// POST /api/v1/deals/close
pub async fn close_deals(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CloseDealsRequest>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let caller = extract_caller(&headers)?;
    state
        .service
        .close_deals(caller, req.into_selection())
        .await?;
    Ok(Json(EmptyResponse {}))
}

/// Resolve the caller id; absence is rejected before any gate check
fn extract_caller(headers: &HeaderMap) -> Result<UserId, ApiError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<UserId>().ok())
        .ok_or_else(ApiError::missing_caller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_caller() {
        let mut headers = HeaderMap::new();
        assert!(extract_caller(&headers).is_err());

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("not-a-number"));
        assert!(extract_caller(&headers).is_err());

        headers.insert(USER_ID_HEADER, HeaderValue::from_static(" 1001 "));
        assert_eq!(extract_caller(&headers).unwrap(), 1001);
    }
}
