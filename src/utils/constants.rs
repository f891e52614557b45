//! Shared constants and invariants

/// Endpoint used when no `ClientOption::Endpoint` is given.
pub const DEFAULT_ENDPOINT: &str = "http://example.com/";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
