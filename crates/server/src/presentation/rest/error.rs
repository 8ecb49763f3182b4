use crate::error::Error;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub kind: &'static str,
    pub message: String,
    pub key: Option<String>,
    pub status: StatusCode,
}

impl ApiError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        ApiError {
            kind: "UNAUTHENTICATED",
            message: message.into(),
            key: None,
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn missing_caller() -> Self {
        Self::unauthenticated("Missing or malformed x-user-id header")
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::NotAuthorizedOperator | Error::NotAuthorizedViewer => StatusCode::FORBIDDEN,
            Error::SymbolNotFound(_) | Error::DealNotFound(_) => StatusCode::NOT_FOUND,
            Error::AlreadyTrading(_) => StatusCode::CONFLICT,
            Error::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Error::Storage(e) => {
                error!("Storage failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ApiError {
            kind: err.kind(),
            message: err.to_string(),
            key: err.key().map(str::to_string),
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            kind: self.kind.to_string(),
            message: self.message,
            key: self.key,
        });
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_ports::StorageError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (Error::NotAuthorizedOperator, StatusCode::FORBIDDEN),
            (Error::NotAuthorizedViewer, StatusCode::FORBIDDEN),
            (Error::SymbolNotFound("x".into()), StatusCode::NOT_FOUND),
            (Error::DealNotFound("d".into()), StatusCode::NOT_FOUND),
            (Error::AlreadyTrading("x".into()), StatusCode::CONFLICT),
            (Error::NotImplemented("x"), StatusCode::NOT_IMPLEMENTED),
            (
                Error::Storage(StorageError::Backend("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_key_is_carried() {
        let api = ApiError::from(Error::AlreadyTrading("adausdt".into()));

        assert_eq!(api.kind, "ALREADY_TRADING");
        assert_eq!(api.key.as_deref(), Some("adausdt"));
        assert_eq!(api.message, "adausdt is already in trading");
    }
}
