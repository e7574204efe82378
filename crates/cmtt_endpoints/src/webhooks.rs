//! Webhook registration.

use cmtt_core::EndpointDescriptor;

/// Event used when none is given.
pub const DEFAULT_EVENT: &str = "new_comment";

/// `GET /webhooks/get`
pub fn list() -> EndpointDescriptor {
    EndpointDescriptor::get("/webhooks/get")
}

/// `POST /webhooks/add`
pub fn add(url: &str, event: Option<&str>) -> EndpointDescriptor {
    EndpointDescriptor::post("/webhooks/add")
        .param("url", url)
        .param("event", event.unwrap_or(DEFAULT_EVENT))
}

/// `POST /webhooks/del`
pub fn delete(event: Option<&str>) -> EndpointDescriptor {
    EndpointDescriptor::post("/webhooks/del").param("event", event.unwrap_or(DEFAULT_EVENT))
}
