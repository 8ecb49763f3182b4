//! Caller authorization
//!
//! Operators may mutate symbol and deal state, viewers may read it. The two
//! sets are independent: an id in only one of them gets only that role.

use std::collections::HashSet;
use tracing::warn;

use crate::error::{Error, Result};

/// Numeric identity of a caller
pub type UserId = i64;

/// What a caller is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Operator,
    Viewer,
    Both,
    Neither,
}

impl Role {
    pub fn can_operate(&self) -> bool {
        matches!(self, Role::Operator | Role::Both)
    }

    pub fn can_view(&self) -> bool {
        matches!(self, Role::Viewer | Role::Both)
    }
}

/// Authorization gate built once at startup
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    operators: HashSet<UserId>,
    viewers: HashSet<UserId>,
}

impl AccessGate {
    pub fn new(
        operators: impl IntoIterator<Item = UserId>,
        viewers: impl IntoIterator<Item = UserId>,
    ) -> Self {
        Self {
            operators: operators.into_iter().collect(),
            viewers: viewers.into_iter().collect(),
        }
    }

    pub fn role(&self, user_id: UserId) -> Role {
        match (
            self.operators.contains(&user_id),
            self.viewers.contains(&user_id),
        ) {
            (true, true) => Role::Both,
            (true, false) => Role::Operator,
            (false, true) => Role::Viewer,
            (false, false) => Role::Neither,
        }
    }

    pub fn require_operator(&self, user_id: UserId) -> Result<()> {
        if self.operators.contains(&user_id) {
            return Ok(());
        }
        warn!("User {} denied operator access", user_id);
        Err(Error::NotAuthorizedOperator)
    }

    pub fn require_viewer(&self, user_id: UserId) -> Result<()> {
        if self.viewers.contains(&user_id) {
            return Ok(());
        }
        warn!("User {} denied viewer access", user_id);
        Err(Error::NotAuthorizedViewer)
    }

    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }
}
