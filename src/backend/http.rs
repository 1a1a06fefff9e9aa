//! REST backend module.
//!
//! This module contains the [`Backend`] implementation talking to
//! the webmail server over HTTP.

use async_trait::async_trait;
use log::{debug, trace};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Deserialize};
use std::collections::BTreeMap;
use url::Url;

use crate::{
    backend::{Backend, Error, Result, ServerConfig},
    email::{Draft, Email, EmailId, EmailUpdate, Envelope},
    mailbox::Mailbox,
};

/// Body the server sends back alongside errors, and after sending
/// an email.
#[derive(Debug, Default, Deserialize)]
struct ServerMessage {
    #[serde(default)]
    error: Option<String>,
}

impl ServerMessage {
    /// Only a non-empty error counts as a failure.
    fn into_error(self) -> Option<String> {
        self.error.filter(|err| !err.trim().is_empty())
    }
}

pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.url)?;
        let headers = build_headers(&config.headers)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(Error::BuildClient)?;

        debug!("built http backend for {base_url}");
        Ok(Self { client, base_url })
    }

    /// Build the absolute url of the given path, relative to the
    /// server base url.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| Error::JoinUrl(err, path.to_owned()))
    }

    fn request(&self, method: Method, path: &str) -> Result<(Url, RequestBuilder)> {
        let url = self.url(path)?;
        let req = self.client.request(method, url.clone());
        Ok((url, req))
    }

    /// Send the request and check its status.
    ///
    /// Non-success statuses are turned into [`Error::UnexpectedStatus`]
    /// carrying the server error message when the body has one.
    async fn execute(&self, method: Method, url: Url, req: RequestBuilder) -> Result<Response> {
        debug!("sending request {method} {url}");

        let res = req
            .send()
            .await
            .map_err(|err| Error::SendRequest(method.clone(), url.clone(), err))?;

        let status = res.status();
        debug!("received status {status} for {method} {url}");

        if status.is_success() {
            return Ok(res);
        }

        let body = read_body(&method, &url, res).await?;
        Err(Error::UnexpectedStatus {
            method,
            url,
            status,
            reason: parse_error_reason(&body),
        })
    }

    async fn json<T: DeserializeOwned>(&self, method: Method, url: Url, res: Response) -> Result<T> {
        let body = read_body(&method, &url, res).await?;
        serde_json::from_slice(&body).map_err(|err| Error::ParseResponse(method, url, err))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_envelopes(&self, mailbox: Mailbox) -> Result<Vec<Envelope>> {
        let (url, req) = self.request(Method::GET, &format!("emails/{mailbox}"))?;
        let res = self.execute(Method::GET, url.clone(), req).await?;
        self.json(Method::GET, url, res).await
    }

    async fn get_email(&self, id: EmailId) -> Result<Email> {
        let (url, req) = self.request(Method::GET, &format!("emails/{id}"))?;
        let res = self.execute(Method::GET, url.clone(), req).await?;
        self.json(Method::GET, url, res).await
    }

    async fn update_email(&self, id: EmailId, update: EmailUpdate) -> Result<()> {
        let (url, req) = self.request(Method::PUT, &format!("emails/{id}"))?;
        trace!("email update: {update:?}");
        self.execute(Method::PUT, url, req.json(&update)).await?;
        Ok(())
    }

    async fn send_email(&self, draft: &Draft) -> Result<()> {
        let (url, req) = self.request(Method::POST, "emails")?;
        trace!("draft: {draft:?}");

        let res = match self.execute(Method::POST, url.clone(), req.json(draft)).await {
            Ok(res) => res,
            Err(Error::UnexpectedStatus {
                reason: Some(reason),
                ..
            }) => return Err(Error::Rejected(reason)),
            Err(err) => return Err(err),
        };

        let body = read_body(&Method::POST, &url, res).await?;
        check_sent(&body).map_err(|err| match err {
            SentError::Rejected(reason) => Error::Rejected(reason),
            SentError::Parse(err) => Error::ParseResponse(Method::POST, url, err),
        })
    }
}

async fn read_body(method: &Method, url: &Url, res: Response) -> Result<Vec<u8>> {
    let body = res
        .bytes()
        .await
        .map_err(|err| Error::ReadResponse(method.clone(), url.clone(), err))?;
    trace!("response body: {}", String::from_utf8_lossy(&body));
    Ok(body.to_vec())
}

/// Parse the server url, making sure it ends with a slash so that
/// relative paths are appended to it instead of replacing its last
/// segment.
fn parse_base_url(url: &str) -> Result<Url> {
    let mut base = url.trim().to_owned();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base).map_err(|err| Error::ParseBaseUrl(err, url.to_owned()))
}

fn build_headers(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let key = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidHeader(name.clone()))?;
        let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name.clone()))?;
        map.insert(key, value);
    }
    Ok(map)
}

fn parse_error_reason(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ServerMessage>(body)
        .ok()
        .and_then(ServerMessage::into_error)
}

enum SentError {
    Rejected(String),
    Parse(serde_json::Error),
}

/// Check the body of a successful send response.
///
/// The server may still report a failure through an `error` field.
/// An empty body means success.
fn check_sent(body: &[u8]) -> std::result::Result<(), SentError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }

    let msg: ServerMessage = serde_json::from_slice(body).map_err(SentError::Parse)?;
    match msg.into_error() {
        Some(reason) => Err(SentError::Rejected(reason)),
        None => Ok(()),
    }
}
