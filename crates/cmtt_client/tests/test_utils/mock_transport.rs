//! Mock transport for testing.

use async_trait::async_trait;
use cmtt_client::{HttpResponse, RequestSpec, Transport};
use cmtt_error::{CmttResult, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this response immediately
    Http(HttpResponse),
    /// Fail with a transport error carrying this message
    Unreachable(String),
    /// Sleep, then return the response
    Delayed(Duration, HttpResponse),
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Http(HttpResponse::new(200, body))
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Http(HttpResponse::new(status, body))
    }
}

/// Mock transport that records requests and replays scripted responses.
///
/// Once the script is exhausted every request gets `{"result": null}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl MockTransport {
    /// Mock that always answers `{"result": null}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that replays `responses` in order.
    pub fn with_script(responses: Vec<MockResponse>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request executed so far.
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests executed so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> RequestSpec {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: RequestSpec) -> CmttResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();

        match next {
            None => Ok(HttpResponse::new(200, r#"{"result": null}"#)),
            Some(MockResponse::Http(response)) => Ok(response),
            Some(MockResponse::Unreachable(message)) => Err(TransportError::new(message).into()),
            Some(MockResponse::Delayed(delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
        }
    }
}
