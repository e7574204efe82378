//! Everything that does not belong to a single resource.

use crate::{MuteAction, Page, SearchOrder, TweetsMode};
use cmtt_core::EndpointDescriptor;

/// `GET /locate`: resolve a site URL to an API object.
pub fn locate(url: &str) -> EndpointDescriptor {
    EndpointDescriptor::get("/locate").param("url", url)
}

/// `GET /search`
///
/// `page` is a page number, not an offset.
pub fn search(query: &str, order_by: Option<SearchOrder>, page: Option<u32>) -> EndpointDescriptor {
    EndpointDescriptor::get("/search")
        .param("query", query)
        .param("order_by", order_by.map(|o| o.to_string()))
        .param("page", page)
}

/// `GET /layout/{version}`
pub fn layout(version: u32) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/layout/{}", version))
}

/// `GET /layout/hashtag/{hashtag}`
pub fn layout_hashtag(hashtag: &str) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/layout/hashtag/{}", hashtag))
}

/// `GET /payments/check`
pub fn payments_check() -> EndpointDescriptor {
    EndpointDescriptor::get("/payments/check")
}

/// `GET /tweets/{mode}`
pub fn tweets(mode: TweetsMode, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get(format!("/tweets/{}", mode)))
}

/// `GET /rates`
pub fn rates() -> EndpointDescriptor {
    EndpointDescriptor::get("/rates")
}

/// `GET /job`
pub fn job() -> EndpointDescriptor {
    EndpointDescriptor::get("/job")
}

/// `GET /job/more/{last_id}`
pub fn job_more(last_id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/job/more/{}", last_id))
}

/// `GET /job/filters`
pub fn job_filters() -> EndpointDescriptor {
    EndpointDescriptor::get("/job/filters")
}

/// `GET /vacancies/widget`
pub fn vacancies() -> EndpointDescriptor {
    EndpointDescriptor::get("/vacancies/widget")
}

/// `POST /content/mute`
pub fn content_mute(action: MuteAction, id: u64) -> EndpointDescriptor {
    EndpointDescriptor::post("/content/mute")
        .param("action", action.to_string())
        .param("id", id)
}

/// `POST /hashtag/mute`
pub fn hashtag_mute(action: MuteAction, id: u64) -> EndpointDescriptor {
    EndpointDescriptor::post("/hashtag/mute")
        .param("action", action.to_string())
        .param("id", id)
}
