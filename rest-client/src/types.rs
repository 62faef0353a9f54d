// rest-client/src/types.rs
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use reqwest::header::HeaderMap;

use crate::error::Error;

/// Supported HTTP verbs.
///
/// The set is closed: anything else fails at parse time, before a request
/// can be described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// The canonical wire token for this verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Validating constructor from text. HTTP methods are case-sensitive,
    /// so only the five canonical uppercase tokens are accepted.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(Error::InvalidMethod(other.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Logical description of one REST API call.
///
/// This is plain data: building and sending it are separate steps. An empty
/// `body` means the request carries none.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub method: Method,
    /// Target URL before query parameters, e.g. `https://api.example.com/v3/keys`.
    pub base_url: String,
    /// Request headers. Unique keys; name casing is irrelevant on the wire.
    pub headers: HashMap<String, String>,
    /// Query parameters, encoded onto the URL in insertion order.
    pub query_params: IndexMap<String, String>,
    pub body: Vec<u8>,
}

/// Buffered response from an API call.
#[derive(Debug, Clone)]
pub struct Response {
    /// e.g. 200
    pub status_code: u16,
    /// Full body, decoded as UTF-8 (lossily, invalid sequences replaced).
    pub body: String,
    /// Headers exactly as the transport produced them. Names with multiple
    /// values (e.g. `Set-Cookie`) keep all of them, in arrival order.
    pub headers: HeaderMap,
}
