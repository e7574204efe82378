//! Comment trees and comment posting.

use crate::{CommentsSorting, CommentsSortingLevel};
use cmtt_core::EndpointDescriptor;
use serde_json::Value;

/// `GET /entry/{id}/comments/{sorting}`
pub fn entry_comments(id: u64, sorting: CommentsSorting) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/entry/{}/comments/{}", id, sorting))
}

/// `GET /entry/{id}/comments/levels/{sorting}`
pub fn entry_comments_levels(id: u64, sorting: CommentsSortingLevel) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/entry/{}/comments/levels/{}", id, sorting))
}

/// `GET /entry/{entry_id}/comments/thread/{comment_id}`
pub fn thread(entry_id: u64, comment_id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/entry/{}/comments/thread/{}", entry_id, comment_id))
}

/// `GET /comment/likers/{id}`
pub fn likers(id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/comment/likers/{}", id))
}

/// `POST /comment/edit/{comment_id}/{entry_id}`
pub fn edit(comment_id: u64, entry_id: u64, text: Option<&str>) -> EndpointDescriptor {
    EndpointDescriptor::post(format!("/comment/edit/{}/{}", comment_id, entry_id)).param("text", text)
}

/// `POST /comment/add`
///
/// `reply_to` of `None` posts a top-level comment (`reply_to=0`).
pub fn send(id: u64, text: &str, reply_to: Option<u64>, attachments: Option<Value>) -> EndpointDescriptor {
    EndpointDescriptor::post("/comment/add")
        .param("id", id)
        .param("text", text)
        .param("reply_to", reply_to.unwrap_or(0))
        .param("attachments", attachments)
}

/// `POST /comment/saveCommentsSeenCount`
pub fn save_seen_count(content_id: u64, count: u32) -> EndpointDescriptor {
    EndpointDescriptor::post("/comment/saveCommentsSeenCount")
        .param("content_id", content_id)
        .param("count", count)
}
