// src/sheets/api/transport.rs
//! HTTP seam between the bulk update pipeline and the network.
//!
//! The pipeline builds `HttpRequest`s and interprets `HttpResponse`s itself;
//! implementations of `SheetsTransport` only move bytes. Retries, pooling and
//! TLS all belong to the implementation.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use crate::settings::AppSettings;
use crate::sheets::error::UpdateResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
}

#[derive(Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub bearer_token: String,
    pub body: Option<Value>,
}

// Token stays out of logs.
impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("bearer_token", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait SheetsTransport: Send + Sync {
    /// Send one request. Only network level failures are errors; any HTTP
    /// status comes back as a response.
    async fn send(&self, request: HttpRequest) -> UpdateResult<HttpResponse>;
}

impl<T: SheetsTransport> SheetsTransport for &T {
    async fn send(&self, request: HttpRequest) -> UpdateResult<HttpResponse> {
        (**self).send(request).await
    }
}

/// `reqwest` backed transport used by the CLI.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: &AppSettings) -> UpdateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl SheetsTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> UpdateResult<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
        };
        tracing::debug!(?method, url = %request.url, "sending sheets request");

        let mut builder = self
            .client
            .request(method, request.url)
            .bearer_auth(&request.bearer_token);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(status, bytes = body.len(), "sheets response received");

        Ok(HttpResponse { status, body })
    }
}
