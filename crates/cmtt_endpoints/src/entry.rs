//! Single entries: reading, voting, publishing, complaints.

use crate::{LikeEntryType, LikeSign};
use cmtt_core::EndpointDescriptor;
use serde_json::Value;

/// `GET /entry/{id}`
pub fn by_id(id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/entry/{}", id))
}

/// `GET /entry/{id}/popular`
pub fn popular(id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/entry/{}/popular", id))
}

/// `POST /like`
pub fn like(id: u64, kind: LikeEntryType, sign: LikeSign) -> EndpointDescriptor {
    EndpointDescriptor::post("/like")
        .param("id", id)
        .param("type", kind.to_string())
        .param("sign", sign.value())
}

/// `POST /entry/create` with plain text.
///
/// `attachments` is typically the `result` of an upload.
pub fn create(title: &str, text: &str, subsite_id: u64, attachments: Option<Value>) -> EndpointDescriptor {
    EndpointDescriptor::post("/entry/create")
        .param("title", title)
        .param("text", text)
        .param("subsite_id", subsite_id)
        .param("attachments", attachments)
}

/// `POST /entry/create` with an editor block document in `entry`.
pub fn create_with_blocks(title: &str, entry: &str, subsite_id: u64) -> EndpointDescriptor {
    EndpointDescriptor::post("/entry/create")
        .param("title", title)
        .param("entry", entry)
        .param("subsite_id", subsite_id)
}

/// `GET /entry/locate`
pub fn locate(url: &str) -> EndpointDescriptor {
    EndpointDescriptor::get("/entry/locate").param("url", url)
}

/// `POST /entry/complaint`
pub fn complaint(content_id: u64) -> EndpointDescriptor {
    EndpointDescriptor::post("/entry/complaint").param("content_id", content_id)
}

/// `POST /entry/comment/complaint`
pub fn comment_complaint(content_id: u64) -> EndpointDescriptor {
    EndpointDescriptor::post("/entry/comment/complaint").param("content_id", content_id)
}
