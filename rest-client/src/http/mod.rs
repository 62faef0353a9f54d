// rest-client/src/http/mod.rs
use async_trait::async_trait;

/// Error type a transport implementation may return. Carried through to the
/// caller verbatim, never reinterpreted.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Pluggable HTTP transport - users can implement their own.
///
/// One operation: execute a fully built request and hand back the raw
/// response. Timeouts, proxies, TLS and redirect policy belong to the
/// implementation; this crate never interprets them. A single attempt per
/// call: retry policy is the caller's.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ::reqwest::Request) -> Result<::reqwest::Response, BoxError>;
}

pub mod reqwest;
