//! Rate-limited request dispatcher.
//!
//! Every call acquires permission from the shared [`RateLimiter`], builds the
//! request, executes it over the [`Transport`] and decodes the JSON body.
//! Non-2xx statuses become `ApiError` with the body untouched.

use crate::{HttpResponse, ReqwestTransport, RequestBuilder, Transport};
use cmtt_core::{ClientConfig, EndpointDescriptor};
use cmtt_error::{ApiError, CmttResult, DecodeError, TimeoutError, TimeoutStage};
use cmtt_rate_limit::{RateLimiter, WindowQuota};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{Instrument, Span, debug, debug_span, info_span, warn};

/// Sends endpoint descriptors to one platform without exceeding its quota.
///
/// The dispatcher is `Send + Sync`; share it behind an `Arc` to let many
/// tasks draw from the same budget.
///
/// # Example
///
/// ```rust,ignore
/// use cmtt_client::Dispatcher;
/// use cmtt_core::{ClientConfig, EndpointDescriptor, Platform};
///
/// let dispatcher = Dispatcher::new(ClientConfig::anonymous(Platform::Vc))?;
/// let entry = dispatcher.call(&EndpointDescriptor::get("/entry/42")).await?;
/// ```
pub struct Dispatcher<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    limiter: RateLimiter,
    builder: RequestBuilder,
    transport: T,
    span: Span,
}

impl Dispatcher<ReqwestTransport> {
    /// Dispatcher over the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured quota is invalid.
    pub fn new(config: ClientConfig) -> CmttResult<Self> {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> Dispatcher<T> {
    /// Dispatcher over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured quota is invalid.
    pub fn with_transport(config: ClientConfig, transport: T) -> CmttResult<Self> {
        let quota = WindowQuota::from_config(&config)?;
        let span = info_span!("cmtt", platform = %config.platform());
        span.in_scope(|| {
            debug!(
                base_url = %config.base_url(),
                calls = quota.calls(),
                window = ?quota.window(),
                authenticated = config.token().is_some(),
                "Creating dispatcher"
            )
        });

        Ok(Self {
            builder: RequestBuilder::new(&config),
            limiter: RateLimiter::new(quota),
            config,
            transport,
            span,
        })
    }

    /// Replace the parent span of every call.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The configuration this dispatcher was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The shared rate limiter.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `descriptor` and decode the JSON response.
    ///
    /// Uses the configured default timeout, if any.
    ///
    /// # Errors
    ///
    /// - `IoError` if the upload file cannot be read
    /// - `TransportError` on network failure
    /// - `ApiError` on any non-2xx status
    /// - `DecodeError` if a 2xx body is not JSON
    /// - `TimeoutError` if the configured default timeout elapses
    pub async fn call(&self, descriptor: &EndpointDescriptor) -> CmttResult<Value> {
        match self.config.timeout() {
            Some(limit) => self.call_with_timeout(descriptor, *limit).await,
            None => {
                let span = self.call_span(descriptor);
                async {
                    self.limiter.acquire().await;
                    let response = self.send(descriptor).await?;
                    decode(response)
                }
                .instrument(span)
                .await
            }
        }
    }

    /// Send `descriptor`, failing with `TimeoutError` if acquiring permission,
    /// building the request and the network exchange take longer than `limit`.
    ///
    /// A call that times out while waiting for permission is not recorded in
    /// the rate-limit history.
    pub async fn call_with_timeout(
        &self,
        descriptor: &EndpointDescriptor,
        limit: Duration,
    ) -> CmttResult<Value> {
        let span = self.call_span(descriptor);
        async {
            let started = Instant::now();
            self.limiter.acquire_within(limit).await?;

            let remaining = limit.saturating_sub(started.elapsed());
            let response = tokio::time::timeout(remaining, self.send(descriptor))
                .await
                .map_err(|_| {
                    warn!(limit = ?limit, "Call exceeded its deadline");
                    TimeoutError::new(TimeoutStage::Network, limit)
                })??;
            decode(response)
        }
        .instrument(span)
        .await
    }

    /// Send `descriptor` and deserialize the JSON response into `R`.
    ///
    /// # Errors
    ///
    /// As [`Dispatcher::call`], plus `DecodeError` if the value does not
    /// match `R`.
    pub async fn call_as<R: DeserializeOwned>(&self, descriptor: &EndpointDescriptor) -> CmttResult<R> {
        let value = self.call(descriptor).await?;
        serde_json::from_value(value).map_err(|e| {
            DecodeError::new(format!("Response does not match expected type: {}", e)).into()
        })
    }

    fn call_span(&self, descriptor: &EndpointDescriptor) -> Span {
        debug_span!(
            parent: &self.span,
            "call",
            method = %descriptor.method(),
            path = %descriptor.path()
        )
    }

    async fn send(&self, descriptor: &EndpointDescriptor) -> CmttResult<HttpResponse> {
        let request = self.builder.build(descriptor).await?;
        debug!(
            url = %request.url(),
            query = request.query().len(),
            "Sending request"
        );
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "Request completed");
        Ok(response)
    }
}

impl<T: Transport> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("limiter", &self.limiter)
            .finish_non_exhaustive()
    }
}

/// Turn a raw response into a JSON value.
///
/// # Errors
///
/// `ApiError` for any non-2xx status, `DecodeError` for a body that is not JSON.
pub fn decode(response: HttpResponse) -> CmttResult<Value> {
    if !response.is_success() {
        warn!(status = response.status, "API returned error status");
        return Err(ApiError::new(response.status, response.body).into());
    }

    serde_json::from_str(&response.body)
        .map_err(|e| DecodeError::new(format!("Response body is not JSON: {}", e)).into())
}
