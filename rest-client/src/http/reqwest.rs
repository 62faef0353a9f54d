// rest-client/src/http/reqwest.rs
use async_trait::async_trait;

use super::{BoxError, HttpTransport};

// The platform HTTP client is a transport as-is. Callers wanting timeouts,
// proxies or a different TLS/redirect policy configure them on the
// `reqwest::Client` they inject.
#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        reqwest::Client::execute(self, request).await.map_err(Into::into)
    }
}
