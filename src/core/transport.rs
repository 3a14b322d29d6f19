//! HTTP transport abstraction
//!
//! The client never talks to the network directly. It hands an [`HttpRequest`]
//! to an [`HttpTransport`] and gets back an [`HttpResponse`] whose body is read
//! and then released through [`ResponseBody`]. [`ReqwestTransport`] is the
//! default implementation; tests and embedders can plug in their own.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::core::errors::TransportError;

pub use reqwest::Method;

/// Outgoing request, fully assembled by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a request without headers or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value with the same name
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }

    /// Look up a header value, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Body of a received response.
///
/// `close` is called exactly once by the client after it is done with the
/// body, whether or not the body was read.
#[async_trait]
pub trait ResponseBody: Send {
    /// Read the whole body
    async fn read(&mut self) -> Result<Vec<u8>, TransportError>;

    /// Release whatever the body still holds
    fn close(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

/// In-memory response body
#[derive(Debug, Clone, Default)]
pub struct BytesBody {
    data: Option<Vec<u8>>,
}

impl BytesBody {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }
}

#[async_trait]
impl ResponseBody for BytesBody {
    async fn read(&mut self) -> Result<Vec<u8>, TransportError> {
        self.data
            .take()
            .ok_or_else(|| TransportError::other("response body already consumed"))
    }
}

/// Received response: status code plus a body still to be consumed
pub struct HttpResponse {
    pub status: u16,
    pub body: Box<dyn ResponseBody>,
}

impl HttpResponse {
    /// Response with an in-memory body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Box::new(BytesBody::new(body)),
        }
    }

    /// Response with a custom body implementation
    pub fn with_body(status: u16, body: impl ResponseBody + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Capability to send one HTTP request and return its response.
///
/// Implementations must be safe to share between concurrent calls if the
/// client using them is shared.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with reqwest defaults (no request timeout)
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that aborts requests running longer than `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!("{} answered with status {}", url, status);

        Ok(HttpResponse::with_body(
            status,
            ReqwestBody {
                response: Some(response),
            },
        ))
    }
}

/// Body of a live reqwest response; dropping the response frees the connection
struct ReqwestBody {
    response: Option<reqwest::Response>,
}

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read(&mut self) -> Result<Vec<u8>, TransportError> {
        let response = self
            .response
            .take()
            .ok_or_else(|| TransportError::other("response body already consumed"))?;

        Ok(response.bytes().await?.to_vec())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.response = None;
        Ok(())
    }
}
