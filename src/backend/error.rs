use reqwest::{Method, StatusCode};
use std::result;
use thiserror::Error;
use url::Url;

/// The global `Result` alias of the backend module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the backend module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse server url {1}")]
    ParseBaseUrl(#[source] url::ParseError, String),
    #[error("cannot build url from path {1}")]
    JoinUrl(#[source] url::ParseError, String),
    #[error("invalid request header {0}")]
    InvalidHeader(String),
    #[error("cannot build http client")]
    BuildClient(#[source] reqwest::Error),
    #[error("cannot send request {0} {1}")]
    SendRequest(Method, Url, #[source] reqwest::Error),
    #[error("cannot read response of {0} {1}")]
    ReadResponse(Method, Url, #[source] reqwest::Error),
    #[error("{method} {url} failed with status {status}{}", .reason.as_deref().map(|r| format!(": {r}")).unwrap_or_default())]
    UnexpectedStatus {
        method: Method,
        url: Url,
        status: StatusCode,
        reason: Option<String>,
    },
    #[error("cannot parse json response of {0} {1}")]
    ParseResponse(Method, Url, #[source] serde_json::Error),
    #[error("server rejected the email: {0}")]
    Rejected(String),
}
