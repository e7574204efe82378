//! Test utilities for cmtt_client integration tests.

#![allow(dead_code)]

mod mock_transport;

pub use mock_transport::{MockResponse, MockTransport};

use cmtt_client::Dispatcher;
use cmtt_core::{ClientConfig, Platform};
use std::sync::Arc;

/// Build a dispatcher over a shared mock transport.
pub fn dispatcher(config: ClientConfig, mock: &Arc<MockTransport>) -> Dispatcher<Arc<MockTransport>> {
    Dispatcher::with_transport(config, Arc::clone(mock)).expect("valid config")
}

/// Anonymous TJournal configuration.
pub fn tjournal() -> ClientConfig {
    ClientConfig::anonymous(Platform::Tjournal)
}
