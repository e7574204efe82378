//! HTTP transport seam.
//!
//! The dispatcher only needs something that can execute a [`RequestSpec`]
//! and hand back status, headers and body text. [`ReqwestTransport`] is the
//! production implementation; tests substitute their own.

use crate::{RequestBody, RequestSpec};
use async_trait::async_trait;
use cmtt_core::HttpMethod;
use cmtt_error::{CmttError, CmttResult, ConfigError, TimeoutError, TimeoutStage, TransportError};
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Raw HTTP response, body undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers, in arrival order.
    pub headers: Vec<(String, String)>,
    /// Body text.
    pub body: String,
}

impl HttpResponse {
    /// Response with `status` and `body` and no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Whether the status is in `200..300`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request against the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and collect the response.
    ///
    /// Non-2xx statuses are not errors at this layer.
    async fn execute(&self, request: RequestSpec) -> CmttResult<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: RequestSpec) -> CmttResult<HttpResponse> {
        (**self).execute(request).await
    }
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport over an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Transport whose client enforces a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> CmttResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            timeout: Some(timeout),
        })
    }

    /// Requests reqwest refuses to build map to `ConfigError`.
    #[track_caller]
    fn map_error(&self, error: reqwest::Error) -> CmttError {
        if error.is_builder() {
            ConfigError::new(format!("Invalid request: {}", error)).into()
        } else if error.is_timeout() {
            match self.timeout {
                Some(limit) => TimeoutError::new(TimeoutStage::Network, limit).into(),
                None => TimeoutError::unknown_limit(TimeoutStage::Network).into(),
            }
        } else {
            TransportError::new(error.to_string()).into()
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    async fn execute(&self, request: RequestSpec) -> CmttResult<HttpResponse> {
        let (method, url, headers, query, body) = request.into_parts();

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::File {
                field,
                file_name,
                bytes,
            } => {
                let part = Part::bytes(bytes).file_name(file_name);
                builder.multipart(Form::new().part(field, part))
            }
        };

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        debug!(status, body_len = body.len(), "Received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmtt_error::CmttErrorKind;

    fn request_with_header(value: &str) -> RequestSpec {
        RequestSpec::new(
            HttpMethod::Get,
            "http://127.0.0.1:9/rates",
            vec![("X-Device-Token".to_string(), value.to_string())],
            Vec::new(),
            RequestBody::Empty,
        )
    }

    #[tokio::test]
    async fn test_invalid_header_value_is_a_config_error() {
        let transport = ReqwestTransport::new();

        let err = transport
            .execute(request_with_header("line\nbreak"))
            .await
            .unwrap_err();

        assert!(
            matches!(err.kind(), CmttErrorKind::Config(_)),
            "expected Config error, got {:?}",
            err
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_timeout_reports_configured_limit() {
        let transport = ReqwestTransport::with_timeout(Duration::from_millis(300)).unwrap();
        assert_eq!(transport.timeout, Some(Duration::from_millis(300)));
        assert_eq!(ReqwestTransport::new().timeout, None);
    }
}
