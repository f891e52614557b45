// tests/common/mod.rs
pub use serde_json::json;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::StatusCode;
use reqwest::{Client, Request};

use crate::client::ResponseBody;
use crate::transport::{Body, BodyStream, RoundTripFn, Transport, TransportError, TransportResponse};

pub type StubFn = Box<dyn Fn(&Request) -> TransportResponse + Send + Sync>;

pub fn stub(f: impl Fn(&Request) -> TransportResponse + Send + Sync + 'static) -> RoundTripFn<StubFn> {
    RoundTripFn(Box::new(f) as StubFn)
}

/// 200 `{"text":"hello"}` for `Bearer ok_token`, 401 with no body otherwise.
pub fn token_checking_transport() -> RoundTripFn<StubFn> {
    let body = serde_json::to_vec(&ResponseBody { text: "hello".to_owned() })
        .expect("serialize body");

    stub(move |req| {
        let authorized = req
            .headers()
            .get(AUTHORIZATION)
            .is_some_and(|value| value.as_bytes() == b"Bearer ok_token");
        if !authorized {
            return TransportResponse::new(StatusCode::UNAUTHORIZED, Body::empty());
        }
        TransportResponse::new(StatusCode::OK, Body::from(body.clone()))
    })
}

pub fn status_transport(status: StatusCode) -> RoundTripFn<StubFn> {
    stub(move |_| TransportResponse::new(status, Body::empty()))
}

pub fn body_transport(status: StatusCode, body: &'static str) -> RoundTripFn<StubFn> {
    stub(move |_| TransportResponse::new(status, Body::from(body)))
}

/// Every `Authorization` value of every request it sees, answering 200 `{"text":"ok"}`.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub seen: Arc<Mutex<Vec<Vec<String>>>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
        let values = request
            .headers()
            .get_all(AUTHORIZATION)
            .iter()
            .map(|value| value.to_str().map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;
        self.seen.lock().expect("lock").push(values);
        Ok(TransportResponse::new(StatusCode::OK, Body::from(r#"{"text":"ok"}"#)))
    }
}

/// Fails every request before anything reaches the wire.
pub struct RefusingTransport;

#[async_trait]
impl Transport for RefusingTransport {
    async fn send(&self, _request: Request) -> Result<TransportResponse, TransportError> {
        Err("connection refused".into())
    }
}

/// Body that reports how far it was read.
pub struct TrackedBody {
    chunks: VecDeque<Bytes>,
    pub pulled: Arc<AtomicUsize>,
    pub finished: Arc<AtomicBool>,
}

impl TrackedBody {
    pub fn new(chunks: &[&'static str], pulled: Arc<AtomicUsize>, finished: Arc<AtomicBool>) -> Self {
        Self {
            chunks: chunks.iter().map(|c| Bytes::from_static(c.as_bytes())).collect(),
            pulled,
            finished,
        }
    }
}

#[async_trait]
impl BodyStream for TrackedBody {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        match self.chunks.pop_front() {
            Some(chunk) => {
                self.pulled.fetch_add(1, Ordering::SeqCst);
                Ok(Some(chunk))
            }
            None => {
                self.finished.store(true, Ordering::SeqCst);
                Ok(None)
            }
        }
    }
}

/// Yields one chunk, then fails like a reset connection.
pub struct BrokenBody {
    sent: bool,
}

impl BrokenBody {
    pub fn new() -> Self {
        Self { sent: false }
    }
}

#[async_trait]
impl BodyStream for BrokenBody {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        if self.sent {
            return Err("connection reset by peer".into());
        }
        self.sent = true;
        Ok(Some(Bytes::from_static(b"{\"text\":")))
    }
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}
