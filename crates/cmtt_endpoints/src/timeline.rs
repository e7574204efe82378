//! Feeds of entries.

use crate::{Page, TimelineCategory, TimelineSorting};
use cmtt_core::EndpointDescriptor;

/// `GET /timeline/{category}/{sorting}`
pub fn timeline(category: TimelineCategory, sorting: TimelineSorting, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get(format!("/timeline/{}/{}", category, sorting)))
}

/// `GET /timeline/mainpage` filtered by `hashtag`
pub fn timeline_by_hashtag(hashtag: &str, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get("/timeline/mainpage").param("hashtag", hashtag))
}

/// `GET /news/default/recent`
pub fn news(page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get("/news/default/recent"))
}

/// `GET /getflashholdedentry`
pub fn flashholder() -> EndpointDescriptor {
    EndpointDescriptor::get("/getflashholdedentry")
}
