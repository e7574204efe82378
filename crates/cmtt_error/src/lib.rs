//! Error types for the cmtt client.
//!
//! This crate provides the error taxonomy shared by every cmtt crate.
//!
//! # Error Hierarchy
//!
//! Each failure is a struct carrying its message plus the caller location
//! (captured with `#[track_caller]`). `CmttErrorKind` unions them and
//! `CmttError` boxes the kind so results stay small.
//!
//! - `ConfigError` - invalid platform or constructor input
//! - `IoError` - upload file could not be read
//! - `TransportError` - connection, DNS or TLS failure
//! - `ApiError` - any non-2xx response, body verbatim
//! - `DecodeError` - 2xx body that is not valid JSON
//! - `TimeoutError` - deadline exceeded while acquiring or on the network
//!
//! # Examples
//!
//! ```
//! use cmtt_error::{CmttResult, TransportError};
//!
//! fn fetch_data() -> CmttResult<String> {
//!     Err(TransportError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod decode;
mod error;
mod io;
mod timeout;
mod transport;

pub use api::ApiError;
pub use config::ConfigError;
pub use decode::DecodeError;
pub use error::{CmttError, CmttErrorKind, CmttResult};
pub use io::IoError;
pub use timeout::{TimeoutError, TimeoutStage};
pub use transport::TransportError;
