//! Core data types for the cmtt client.
//!
//! - [`Platform`] - the closed set of deployments and their domains
//! - [`ClientConfig`] - immutable constructor input of a dispatcher
//! - [`EndpointDescriptor`] / [`Params`] - one remote operation, as data
//! - [`telemetry`] - opt-in tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod endpoint;
mod platform;
pub mod telemetry;

pub use config::{API_VERSION, CALLS_LIMIT, CALLS_WINDOW, ClientConfig, ClientConfigBuilder, USER_AGENT};
pub use endpoint::{EndpointDescriptor, HttpMethod, Params};
pub use platform::Platform;
