// rest-client/src/client.rs
use std::sync::LazyLock;

use indexmap::IndexMap;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::http::HttpTransport;
use crate::types::{Request, Response};

const JSON_MIME: &str = "application/json";

static DEFAULT_CLIENT: LazyLock<Client> = LazyLock::new(Client::default);

/// Append query parameters to a URL, form-encoded, in insertion order.
///
/// An empty mapping returns the base URL unchanged. The base URL is carried
/// as-is; it is not validated at this layer.
pub fn add_query_parameters(base_url: &str, query_params: &IndexMap<String, String>) -> String {
    if query_params.is_empty() {
        return base_url.to_string();
    }
    let mut encoder = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in query_params {
        encoder.append_pair(key, value);
    }
    format!("{base_url}?{}", encoder.finish())
}

/// Build a transport-level request from a descriptor.
///
/// When the descriptor carries a body and no `Content-Type` header (any
/// casing), the content type defaults to `application/json`; an explicit
/// value, JSON or not, is never overwritten. JSON bodies, defaulted or
/// explicitly `application/json`, shed surrounding whitespace. No I/O
/// happens here.
pub fn build_request(request: &Request) -> Result<reqwest::Request, Error> {
    let url = if request.query_params.is_empty() {
        request.base_url.clone()
    } else {
        add_query_parameters(&request.base_url, &request.query_params)
    };
    let url = Url::parse(&url)?;

    let mut built = reqwest::Request::new(request.method.into(), url);
    for (name, value) in &request.headers {
        let name: HeaderName = name.parse()?;
        built.headers_mut().insert(name, HeaderValue::from_str(value)?);
    }

    let default_to_json = !request.body.is_empty() && !built.headers().contains_key(CONTENT_TYPE);
    let json_body = default_to_json
        || built
            .headers()
            .get(CONTENT_TYPE)
            .is_some_and(|value| value.as_bytes() == JSON_MIME.as_bytes());

    // Surrounding whitespace is insignificant in JSON. A body that trims to
    // nothing is attached as no body at all.
    let body = if json_body {
        request.body.trim_ascii()
    } else {
        &request.body[..]
    };
    if !body.is_empty() {
        *built.body_mut() = Some(body.to_vec().into());
    }
    if default_to_json {
        built
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
    }
    Ok(built)
}

/// Normalize a raw transport response into a buffered [`Response`].
///
/// Reads the entire body into memory, without a size cap. The raw response
/// is consumed, so the underlying stream is released on every path,
/// including a read that fails partway through - in which case no response
/// value is produced.
pub async fn build_response(raw: reqwest::Response) -> Result<Response, Error> {
    let status_code = raw.status().as_u16();
    let headers = raw.headers().clone();
    let bytes = raw.bytes().await?;
    Ok(Response {
        status_code,
        body: String::from_utf8_lossy(&bytes).into_owned(),
        headers,
    })
}

/// Sends request descriptors through an injectable transport.
///
/// `Client::default()` rides a fresh `reqwest::Client`; anything
/// implementing [`HttpTransport`] can take its place.
pub struct Client<T: HttpTransport = reqwest::Client> {
    transport: T,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(reqwest::Client::new())
    }
}

impl<T: HttpTransport> Client<T> {
    /// Wrap a transport. Timeouts, proxies, redirect policy and TLS are
    /// configured on the transport before it is handed over.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Hand a built request to the transport. One attempt, no retries;
    /// a failure comes back as [`Error::Transport`] with the cause intact.
    pub async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, Error> {
        self.transport.execute(request).await.map_err(Error::Transport)
    }

    /// Send a REST request and return the normalized response.
    pub async fn send(&self, request: &Request) -> Result<Response, Error> {
        debug!(method = %request.method, url = %request.base_url, "sending request");
        let built = build_request(request)?;
        let raw = self.execute(built).await?;
        let response = build_response(raw).await?;
        debug!(
            status = response.status_code,
            bytes = response.body.len(),
            "request complete"
        );
        Ok(response)
    }
}

/// Send a request through the shared default client.
///
/// The default is constructed lazily and reused for the life of the
/// process. Tests, and callers that need transport configuration, should
/// construct a [`Client`] explicitly instead.
pub async fn send(request: &Request) -> Result<Response, Error> {
    DEFAULT_CLIENT.send(request).await
}
