//! High-level client bundling a dispatcher with an optional retry policy.

use cmtt_client::{Dispatcher, ReqwestTransport, RetryPolicy, Transport};
use cmtt_core::{ClientConfig, EndpointDescriptor, Platform};
use cmtt_endpoints::{
    Page, SearchOrder, TimelineCategory, TimelineSorting, comment, entry, misc, timeline, uploader,
    user,
};
use cmtt_error::{CmttResult, DecodeError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::instrument;

/// Client for one platform.
///
/// Every call goes through the same rate limiter. With a retry policy set,
/// retryable failures are retried; without one, each call is attempted once.
///
/// # Example
///
/// ```rust,ignore
/// use cmtt::{Cmtt, Page, Platform, TimelineCategory, TimelineSorting};
///
/// let client = Cmtt::anonymous(Platform::Dtf)?;
/// let feed = client
///     .timeline(TimelineCategory::Index, TimelineSorting::Popular, Page::first(10))
///     .await?;
/// ```
#[derive(Debug)]
pub struct Cmtt<T: Transport = ReqwestTransport> {
    dispatcher: Dispatcher<T>,
    retry: Option<RetryPolicy>,
}

impl Cmtt<ReqwestTransport> {
    /// Client over the default transport.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured quota is invalid.
    pub fn new(config: ClientConfig) -> CmttResult<Self> {
        Ok(Self::from_dispatcher(Dispatcher::new(config)?))
    }

    /// Unauthenticated client with default settings.
    pub fn anonymous(platform: Platform) -> CmttResult<Self> {
        Self::new(ClientConfig::anonymous(platform))
    }

    /// Client configured from `CMTT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CMTT_PLATFORM` is missing or any variable is
    /// malformed.
    pub fn from_env() -> CmttResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> Cmtt<T> {
    /// Client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> CmttResult<Self> {
        Ok(Self::from_dispatcher(Dispatcher::with_transport(config, transport)?))
    }

    /// Wrap an existing dispatcher.
    pub fn from_dispatcher(dispatcher: Dispatcher<T>) -> Self {
        Self {
            dispatcher,
            retry: None,
        }
    }

    /// Retry retryable failures according to `policy`.
    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    /// The underlying dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// The retry policy, if any.
    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry.as_ref()
    }

    /// Send any descriptor.
    pub async fn call(&self, descriptor: &EndpointDescriptor) -> CmttResult<Value> {
        match &self.retry {
            Some(policy) => self.dispatcher.call_with_retry(descriptor, policy).await,
            None => self.dispatcher.call(descriptor).await,
        }
    }

    /// Send any descriptor and deserialize the response into `R`.
    pub async fn call_as<R: DeserializeOwned>(&self, descriptor: &EndpointDescriptor) -> CmttResult<R> {
        let value = self.call(descriptor).await?;
        serde_json::from_value(value).map_err(|e| {
            DecodeError::new(format!("Response does not match expected type: {}", e)).into()
        })
    }

    /// A timeline feed.
    #[instrument(skip(self))]
    pub async fn timeline(
        &self,
        category: TimelineCategory,
        sorting: TimelineSorting,
        page: Page,
    ) -> CmttResult<Value> {
        self.call(&timeline::timeline(category, sorting, page)).await
    }

    /// One entry by id.
    #[instrument(skip(self))]
    pub async fn entry(&self, id: u64) -> CmttResult<Value> {
        self.call(&entry::by_id(id)).await
    }

    /// The account the token belongs to.
    #[instrument(skip(self))]
    pub async fn me(&self) -> CmttResult<Value> {
        self.call(&user::me()).await
    }

    /// Full-text search.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        order_by: Option<SearchOrder>,
        page: Option<u32>,
    ) -> CmttResult<Value> {
        self.call(&misc::search(query, order_by, page)).await
    }

    /// Post a comment under entry `entry_id`.
    #[instrument(skip(self, text, attachments))]
    pub async fn send_comment(
        &self,
        entry_id: u64,
        text: &str,
        reply_to: Option<u64>,
        attachments: Option<Value>,
    ) -> CmttResult<Value> {
        self.call(&comment::send(entry_id, text, reply_to, attachments))
            .await
    }

    /// Upload a local file; the response `result` can be used as attachments.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn upload(&self, path: impl AsRef<Path> + Send) -> CmttResult<Value> {
        self.call(&uploader::upload(path)).await
    }
}
