//! Service facade
//!
//! Single entry point for the transport. Every operation checks the caller
//! against the access gate before touching storage, then delegates.

use std::sync::Arc;
use warden_core::Deal;
use warden_ports::{DealRepository, SymbolRepository};

use super::access::{AccessGate, UserId};
use super::deals::{DealLedger, DealSelection};
use super::symbols::{SymbolBalance, SymbolLifecycleManager, SymbolLimit, SymbolSummary};
use crate::config::SymbolSettings;
use crate::error::Result;

pub struct WardenService {
    gate: AccessGate,
    symbols: SymbolLifecycleManager,
    deals: DealLedger,
}

impl WardenService {
    pub fn new(
        gate: AccessGate,
        symbol_repo: Arc<dyn SymbolRepository>,
        deal_repo: Arc<dyn DealRepository>,
        settings: &SymbolSettings,
    ) -> Self {
        Self {
            gate,
            symbols: SymbolLifecycleManager::new(symbol_repo, settings.default_limit),
            deals: DealLedger::new(deal_repo),
        }
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    // Symbols

    pub async fn list_symbols(&self, caller: UserId) -> Result<Vec<SymbolSummary>> {
        self.gate.require_viewer(caller)?;
        self.symbols.list().await
    }

    pub async fn prepare_symbol(&self, caller: UserId, symbol: &str) -> Result<()> {
        self.gate.require_operator(caller)?;
        self.symbols.prepare(symbol).await
    }

    pub async fn start_symbol(&self, caller: UserId, symbol: &str) -> Result<()> {
        self.gate.require_operator(caller)?;
        self.symbols.start(symbol).await
    }

    pub async fn stop_symbol(&self, caller: UserId, symbol: &str) -> Result<()> {
        self.gate.require_operator(caller)?;
        self.symbols.stop(symbol).await
    }

    pub async fn suspend_symbol(&self, caller: UserId, symbol: &str) -> Result<()> {
        self.gate.require_operator(caller)?;
        self.symbols.suspend(symbol).await
    }

    pub async fn resume_symbol(&self, caller: UserId, symbol: &str) -> Result<()> {
        self.gate.require_operator(caller)?;
        self.symbols.resume(symbol).await
    }

    pub async fn get_balances(&self, caller: UserId) -> Result<Vec<SymbolBalance>> {
        self.gate.require_viewer(caller)?;
        self.symbols.balances().await
    }

    pub async fn get_limits(&self, caller: UserId) -> Result<Vec<SymbolLimit>> {
        self.gate.require_viewer(caller)?;
        self.symbols.limits().await
    }

    pub async fn set_limits(&self, caller: UserId, limits: Vec<SymbolLimit>) -> Result<()> {
        self.gate.require_operator(caller)?;
        self.symbols.set_limits(limits).await
    }

    // Deals

    pub async fn list_active_deals(
        &self,
        caller: UserId,
        selection: DealSelection,
    ) -> Result<Vec<Deal>> {
        self.gate.require_viewer(caller)?;
        self.deals.list_active(selection).await
    }

    pub async fn list_potential_deals(&self, caller: UserId) -> Result<Vec<Deal>> {
        self.gate.require_viewer(caller)?;
        self.deals.list_potential().await
    }

    pub async fn close_deals(&self, caller: UserId, selection: DealSelection) -> Result<()> {
        self.gate.require_operator(caller)?;
        self.deals.close(selection).await
    }
}
