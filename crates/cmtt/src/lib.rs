//! cmtt - rate-limited async client for the TJournal, DTF and VC APIs
//!
//! The three platforms share one HTTP API. This crate bundles the pieces
//! needed to talk to it without tripping its rate limit.
//!
//! # Features
//!
//! - **Rate limiting**: at most N calls per rolling window per client (3 per
//!   second by default), shared by every task using the client
//! - **Typed catalog**: one function per remote operation, see [`entry`],
//!   [`timeline`], [`user`] and friends
//! - **Typed errors**: API errors keep status and body, timeouts and
//!   transport failures are distinct
//! - **Opt-in retry**: exponential backoff with jitter for retryable failures
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cmtt::{ClientConfig, Cmtt, Platform, comment, uploader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::builder()
//!         .platform(Platform::Tjournal)
//!         .token(std::env::var("CMTT_TOKEN")?)
//!         .build()?;
//!     let client = Cmtt::new(config)?;
//!
//!     let uploaded = client.call(&uploader::upload("mars.jpg")).await?;
//!     client
//!         .call(&comment::send(86279, "api test", None, Some(uploaded["result"].clone())))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `cmtt_error` - error types
//! - `cmtt_core` - platforms, configuration, endpoint descriptors
//! - `cmtt_rate_limit` - sliding-window limiter
//! - `cmtt_client` - request building, transport, dispatcher, retry
//! - `cmtt_endpoints` - endpoint catalog
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]

mod client;

pub use client::Cmtt;

pub use cmtt_client::*;
pub use cmtt_core::*;
pub use cmtt_endpoints::*;
pub use cmtt_error::*;
pub use cmtt_rate_limit::{RateLimiter, SlidingWindow, WindowQuota};
