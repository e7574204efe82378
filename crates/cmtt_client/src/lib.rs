//! Rate-limited dispatcher for the TJournal, DTF and VC APIs.
//!
//! - [`Dispatcher`] - acquires rate-limit permission, sends, decodes
//! - [`RequestBuilder`] / [`RequestSpec`] - descriptor to concrete request
//! - [`Transport`] - the HTTP seam, with [`ReqwestTransport`] as default
//! - [`RetryPolicy`] - opt-in backoff for retryable failures
//!
//! # Example
//!
//! ```rust,ignore
//! use cmtt_client::Dispatcher;
//! use cmtt_core::{ClientConfig, EndpointDescriptor, Platform};
//!
//! let config = ClientConfig::builder()
//!     .platform(Platform::Dtf)
//!     .token(std::env::var("CMTT_TOKEN")?)
//!     .build()?;
//! let dispatcher = Dispatcher::new(config)?;
//!
//! let me = dispatcher.call(&EndpointDescriptor::get("/user/me")).await?;
//! println!("{}", me["result"]["name"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dispatcher;
mod request;
mod retry;
mod transport;

pub use dispatcher::{Dispatcher, decode};
pub use request::{
    ATTACHMENTS_PARAM, RequestBody, RequestBuilder, RequestSpec, TOKEN_HEADER, UPLOAD_FIELD,
    USER_AGENT_HEADER, encode_params, render_value,
};
pub use retry::RetryPolicy;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
