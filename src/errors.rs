//! Error types returned by [`TokenClient::fetch_text`](crate::client::TokenClient::fetch_text).

use http::header::InvalidHeaderValue;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can terminate a single `fetch_text` call.
///
/// None of them are retried internally; every variant is handed back to the
/// caller as soon as it happens.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The outbound request could not be built.
    #[error(transparent)]
    RequestConstruction(#[from] RequestError),

    /// The transport failed to deliver the request or to stream the body.
    #[error(transparent)]
    Transport(TransportError),

    /// A response arrived with a status other than 200.
    #[error("bad response status code {0}")]
    UnexpectedStatus(u16),

    /// The 200 body was not valid JSON of shape `{"text": string}`.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Status code carried by [`ClientError::UnexpectedStatus`].
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }

    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Reasons a request could not be constructed.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    InvalidEndpoint(#[from] url::ParseError),

    /// The formatted credential contains bytes that are illegal in a header value.
    #[error(transparent)]
    InvalidCredential(#[from] InvalidHeaderValue),
}
