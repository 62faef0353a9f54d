// rest-client/src/error.rs
use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

use crate::http::BoxError;
use crate::types::Response;

/// Errors surfaced while building, sending, or normalizing a request.
///
/// Nothing here is recovered internally: every failure propagates to the
/// caller, and no response value is produced alongside one.
#[derive(Debug, Error)]
pub enum Error {
    /// The method token is not one of the supported verbs.
    #[error("unsupported HTTP method {0:?}")]
    InvalidMethod(String),

    /// The final URL (base plus encoded query) did not parse.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A descriptor header name was rejected by the HTTP layer.
    #[error("invalid header name: {0}")]
    HeaderName(#[from] InvalidHeaderName),

    /// A descriptor header value was rejected by the HTTP layer.
    #[error("invalid header value: {0}")]
    HeaderValue(#[from] InvalidHeaderValue),

    /// The transport could not complete the exchange (DNS, connect, TLS,
    /// timeout, cancellation). The underlying cause is carried untouched.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response body could not be fully read.
    #[error("failed to read response body: {0}")]
    Read(#[from] reqwest::Error),
}

/// An error derived from an API response, for callers that promote non-2xx
/// responses into failures. The transport itself never constructs one.
#[derive(Debug, Error)]
#[error("{}", .response.body)]
pub struct RestError {
    pub response: Response,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_rest_error_displays_response_body() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let err = RestError {
            response: Response {
                status_code: 400,
                body: r#"{"result": "failure"}"#.to_string(),
                headers,
            },
        };
        assert_eq!(err.to_string(), r#"{"result": "failure"}"#);
    }

    #[test]
    fn test_transport_error_keeps_the_cause() {
        let cause: BoxError = "connection refused".into();
        let err = Error::Transport(cause);
        assert_eq!(err.to_string(), "transport error: connection refused");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_method_names_the_token() {
        let err = Error::InvalidMethod("@".to_string());
        assert_eq!(err.to_string(), "unsupported HTTP method \"@\"");
    }
}
