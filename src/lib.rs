//! # Token Client Library
//!
//! A minimal authenticated HTTP client: one GET request carrying
//! `Authorization: Bearer <token>`, a status check, and a JSON decode of
//! `{"text": ...}`.
//!
//! Modules:
//! - `client`: `TokenClient`, construction options, response decoding
//! - `transport`: the injectable transport and response body handling
//! - `errors`: error taxonomy returned by `fetch_text`
//! - `config`: YAML settings for the command line wrapper
//! - `utils`: constants and logging setup

pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::client::{ClientOption, DecodeMode, ResponseBody, TokenClient};
pub use crate::errors::{ClientError, RequestError};
