// rest-client/src/lib.rs
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{add_query_parameters, build_request, build_response, send, Client};
pub use error::{Error, RestError};
pub use http::{BoxError, HttpTransport};
pub use types::{Method, Request, Response};
