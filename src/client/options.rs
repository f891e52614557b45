use std::fmt;
use std::sync::Arc;

use crate::client::response::DecodeMode;
use crate::transport::Transport;

/// Construction-time modifier for [`TokenClient`](crate::client::TokenClient).
///
/// Options are applied in the order given; when two touch the same field
/// the later one wins.
pub enum ClientOption {
    /// Send requests through this transport instead of a default `reqwest::Client`.
    Transport(Arc<dyn Transport>),
    /// Replace [`DEFAULT_ENDPOINT`](crate::utils::constants::DEFAULT_ENDPOINT).
    Endpoint(String),
    DecodeMode(DecodeMode),
}

impl ClientOption {
    pub fn transport(transport: impl Transport + 'static) -> Self {
        Self::Transport(Arc::new(transport))
    }

    pub fn endpoint(endpoint: impl Into<String>) -> Self {
        Self::Endpoint(endpoint.into())
    }

    pub fn decode_mode(mode: DecodeMode) -> Self {
        Self::DecodeMode(mode)
    }
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(_) => f.write_str("Transport(..)"),
            Self::Endpoint(endpoint) => f.debug_tuple("Endpoint").field(endpoint).finish(),
            Self::DecodeMode(mode) => f.debug_tuple("DecodeMode").field(mode).finish(),
        }
    }
}
