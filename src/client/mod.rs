//! Client module
//!
//! `TokenClient` issues one authenticated GET and decodes `{"text": ...}`.

use std::fmt;
use std::sync::Arc;

use http::header::{HeaderValue, AUTHORIZATION};
use http::{Method, StatusCode};
use reqwest::{Client, Request, Url};
use tracing::{debug, trace};

use crate::errors::{ClientError, RequestError};
use crate::transport::{Transport, TransportResponse};
use crate::utils::constants::DEFAULT_ENDPOINT;

pub mod options;
pub mod response;

pub use options::ClientOption;
pub use response::{DecodeMode, ResponseBody};

/// Bearer-token client for a single JSON endpoint.
///
/// Cheap to clone; clones share the transport. Safe to call from several
/// tasks at once as long as the transport is.
#[derive(Clone)]
pub struct TokenClient {
    /// `"Bearer <token>"`, fixed at construction
    formatted_token: String,
    transport: Arc<dyn Transport>,
    endpoint: String,
    decode_mode: DecodeMode,
}

impl TokenClient {
    /// Build a client for `token`. The token is used verbatim, an empty one
    /// included.
    pub fn new(token: impl AsRef<str>, options: impl IntoIterator<Item = ClientOption>) -> Self {
        let mut transport: Option<Arc<dyn Transport>> = None;
        let mut endpoint = DEFAULT_ENDPOINT.to_owned();
        let mut decode_mode = DecodeMode::default();

        for option in options {
            match option {
                ClientOption::Transport(t) => transport = Some(t),
                ClientOption::Endpoint(e) => endpoint = e,
                ClientOption::DecodeMode(m) => decode_mode = m,
            }
        }

        Self {
            formatted_token: format!("Bearer {}", token.as_ref()),
            transport: transport.unwrap_or_else(|| Arc::new(Client::new())),
            endpoint,
            decode_mode,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// GET the endpoint with the bearer credential and decode the body.
    ///
    /// Any status other than 200 is an error. The response body is consumed to
    /// the end before returning, whatever the outcome.
    pub async fn fetch_text(&self) -> Result<ResponseBody, ClientError> {
        let request = self.build_request()?;

        debug!("fetching text from {}", self.endpoint);
        let TransportResponse { status, mut body } = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Transport)?;

        if status != StatusCode::OK {
            let discarded = body.drain().await;
            debug!("bad status {} from {}, discarded {} body bytes", status, self.endpoint, discarded);
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        let bytes = body.read_to_end().await.map_err(ClientError::Transport)?;
        trace!("received {} body bytes from {}", bytes.len(), self.endpoint);

        Ok(response::decode(&bytes, self.decode_mode)?)
    }

    fn build_request(&self) -> Result<Request, RequestError> {
        let url = Url::parse(&self.endpoint)?;
        let mut credential = HeaderValue::from_str(&self.formatted_token)?;
        credential.set_sensitive(true);

        let mut request = Request::new(Method::GET, url);
        request.headers_mut().insert(AUTHORIZATION, credential);
        Ok(request)
    }
}

impl fmt::Debug for TokenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenClient")
            .field("endpoint", &self.endpoint)
            .field("decode_mode", &self.decode_mode)
            .finish_non_exhaustive()
    }
}
