pub mod client;
pub mod request;
pub mod request_builder;
pub mod response;

pub use client::Client;
pub use client::ClientRequestBuilder;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("resource not found: {message}")]
    NotFound { message: String },
    #[error("not authorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },
    #[error("conflict ({status}): {message}")]
    Conflict { status: u16, message: String },
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to serialize request body")]
    SerializeRequest {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    /// Classifies a non-2xx response.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => Error::NotFound { message },
            401 | 403 => Error::Unauthorized { status, message },
            409 | 422 => Error::Conflict { status, message },
            _ => Error::UnexpectedStatus { status, message },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Error::Network { .. } => "network",
            Error::NotFound { .. } => "not_found",
            Error::Unauthorized { .. } => "unauthorized",
            Error::Conflict { .. } => "conflict",
            Error::UnexpectedStatus { .. } => "unexpected_status",
            Error::ParseResponse { .. } => "parse_response",
            Error::SerializeRequest { .. } => "serialize_request",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
