//! Deal enumeration and closure

use std::sync::Arc;
use tracing::{debug, info};
use warden_core::{Deal, DealId};
use warden_ports::DealRepository;

use crate::error::{Error, Result};

/// Which deals an operation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealSelection {
    All,
    /// Specific ids, processed in the given order
    Ids(Vec<DealId>),
}

impl DealSelection {
    /// Build from the wire shape: the `all` flag wins over any ids
    pub fn from_flag(all: bool, ids: Vec<DealId>) -> Self {
        if all {
            DealSelection::All
        } else {
            DealSelection::Ids(ids)
        }
    }
}

pub struct DealLedger {
    repository: Arc<dyn DealRepository>,
}

impl DealLedger {
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_active(&self, selection: DealSelection) -> Result<Vec<Deal>> {
        match selection {
            DealSelection::All => {
                let deals = self.repository.get_all().await?;
                debug!("Listing {} active deals", deals.len());
                Ok(deals)
            }
            DealSelection::Ids(_) => Err(Error::NotImplemented("selective active deal listing")),
        }
    }

    /// Potential deal discovery needs market data this service does not have
    pub async fn list_potential(&self) -> Result<Vec<Deal>> {
        Err(Error::NotImplemented("potential deal listing"))
    }

    /// Delete the selected deals sequentially
    ///
    /// With explicit ids the first unknown id aborts the batch; deals closed
    /// before it stay closed.
    pub async fn close(&self, selection: DealSelection) -> Result<()> {
        match selection {
            DealSelection::All => {
                let deals = self.repository.get_all().await?;
                let count = deals.len();
                for deal in deals {
                    self.repository.delete(&deal.id).await?;
                }
                info!("Closed all {} deals", count);
            }
            DealSelection::Ids(ids) => {
                for id in ids {
                    let deal = self
                        .repository
                        .get(&id)
                        .await?
                        .ok_or_else(|| Error::DealNotFound(id.clone()))?;
                    self.repository.delete(&deal.id).await?;
                    info!("Closed deal '{}' on '{}'", deal.id, deal.symbol);
                }
            }
        }
        Ok(())
    }
}
