//! Transport module
//!
//! The capability that actually puts a request on the wire. `TokenClient`
//! only builds requests and interprets responses; everything network-shaped
//! lives behind [`Transport`] so it can be swapped for a stub in tests.

use std::collections::VecDeque;
use std::error::Error;

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use reqwest::{Client, Request, Response};
use tracing::debug;

pub mod round_trip;

pub use round_trip::RoundTripFn;

/// Native error of a transport, passed through to the caller untouched.
pub type TransportError = Box<dyn Error + Send + Sync>;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<TransportResponse, TransportError>;
}

#[derive(Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Body,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: Body) -> Self {
        Self { status, body }
    }
}

/// Pull-based source of body chunks. `Ok(None)` marks the end of the body.
#[async_trait]
pub trait BodyStream: Send {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError>;
}

/// Response body handed out by a transport.
///
/// Dropping a `Body` releases whatever connection backs it. Drain it first if
/// the connection should go back to the pool.
pub struct Body {
    inner: Box<dyn BodyStream>,
}

impl Body {
    pub fn new(stream: impl BodyStream + 'static) -> Self {
        Self {
            inner: Box::new(stream),
        }
    }

    pub fn empty() -> Self {
        Self::from_chunks(Vec::new())
    }

    pub fn from_chunks(chunks: Vec<Bytes>) -> Self {
        Self::new(Chunks(chunks.into()))
    }

    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        self.inner.next_chunk().await
    }

    /// Read until the end of the body into one buffer.
    pub async fn read_to_end(&mut self) -> Result<Vec<u8>, TransportError> {
        let mut buf = Vec::new();
        while let Some(chunk) = self.next_chunk().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf)
    }

    /// Read and discard the rest of the body, then release it.
    /// Returns the number of bytes discarded.
    pub async fn drain(mut self) -> usize {
        let mut discarded = 0;
        loop {
            match self.next_chunk().await {
                Ok(Some(chunk)) => discarded += chunk.len(),
                Ok(None) => break,
                Err(err) => {
                    // broken stream, nothing left to drain
                    debug!("body drain stopped after {} bytes: {}", discarded, err);
                    break;
                }
            }
        }
        discarded
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body").finish_non_exhaustive()
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::from_chunks(vec![bytes])
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes::from(bytes).into()
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Bytes::from(text).into()
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Bytes::from_static(text.as_bytes()).into()
    }
}

struct Chunks(VecDeque<Bytes>);

#[async_trait]
impl BodyStream for Chunks {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        Ok(self.0.pop_front())
    }
}

struct ReqwestBody(Response);

#[async_trait]
impl BodyStream for ReqwestBody {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        Ok(self.0.chunk().await?)
    }
}

#[async_trait]
impl Transport for Client {
    async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
        let response = self.execute(request).await?;
        let status = response.status();
        Ok(TransportResponse::new(status, Body::new(ReqwestBody(response))))
    }
}
