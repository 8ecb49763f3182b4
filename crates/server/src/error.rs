//! Warden service errors

use thiserror::Error;
use warden_ports::StorageError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("You are not authorized to perform this operation")]
    NotAuthorizedOperator,

    #[error("You are not authorized to view this data")]
    NotAuthorizedViewer,

    #[error("Unknown symbol '{0}'")]
    SymbolNotFound(String),

    #[error("Unknown deal '{0}'")]
    DealNotFound(String),

    #[error("{0} is already in trading")]
    AlreadyTrading(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl Error {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotAuthorizedOperator => "NOT_AUTHORIZED_OPERATOR",
            Error::NotAuthorizedViewer => "NOT_AUTHORIZED_VIEWER",
            Error::SymbolNotFound(_) => "SYMBOL_NOT_FOUND",
            Error::DealNotFound(_) => "DEAL_NOT_FOUND",
            Error::AlreadyTrading(_) => "ALREADY_TRADING",
            Error::NotImplemented(_) => "NOT_IMPLEMENTED",
            Error::Storage(_) => "STORAGE_FAILURE",
        }
    }

    /// The offending symbol or deal id, if the error carries one
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::SymbolNotFound(key) | Error::DealNotFound(key) | Error::AlreadyTrading(key) => {
                Some(key)
            }
            _ => None,
        }
    }

    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Error::NotAuthorizedOperator | Error::NotAuthorizedViewer
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_key() {
        assert_eq!(
            Error::SymbolNotFound("xyz".into()).to_string(),
            "Unknown symbol 'xyz'"
        );
        assert_eq!(
            Error::AlreadyTrading("xyz".into()).to_string(),
            "xyz is already in trading"
        );
        assert_eq!(Error::DealNotFound("d-1".into()).key(), Some("d-1"));
    }

    #[test]
    fn test_storage_error_is_distinct_kind() {
        let err: Error = StorageError::Backend("connection reset".into()).into();

        assert_eq!(err.kind(), "STORAGE_FAILURE");
        assert!(err.key().is_none());
        assert!(!err.is_authorization());
    }
}
