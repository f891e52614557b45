use async_trait::async_trait;
use reqwest::Request;

use crate::transport::{Transport, TransportError, TransportResponse};

/// Transport backed by a plain function: every request is answered by
/// calling `F`, no network involved.
///
/// ```
/// use http::StatusCode;
/// use token_client::transport::{Body, RoundTripFn, TransportResponse};
///
/// let always_ok = RoundTripFn(|_req: &reqwest::Request| {
///     TransportResponse::new(StatusCode::OK, Body::from(r#"{"text":"hi"}"#))
/// });
/// # let _ = always_ok;
/// ```
pub struct RoundTripFn<F>(pub F);

#[async_trait]
impl<F> Transport for RoundTripFn<F>
where
    F: Fn(&Request) -> TransportResponse + Send + Sync,
{
    async fn send(&self, request: Request) -> Result<TransportResponse, TransportError> {
        Ok((self.0)(&request))
    }
}
