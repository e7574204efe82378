//! Users, the authenticated account, notifications and favorites.

use crate::{FavoriteType, Page};
use cmtt_core::EndpointDescriptor;
use serde_json::Value;

/// `GET /user/{id}`
pub fn by_id(id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/user/{}", id))
}

/// `GET /user/me`
pub fn me() -> EndpointDescriptor {
    EndpointDescriptor::get("/user/me")
}

/// `GET /user/me/updates`
///
/// `is_read` defaults to `1`.
pub fn me_updates(id: u64, is_read: Option<u8>, last_id: Option<u64>) -> EndpointDescriptor {
    EndpointDescriptor::get("/user/me/updates")
        .param("id", id)
        .param("is_read", is_read.unwrap_or(1))
        .param("last_id", last_id)
}

/// `GET /user/me/updates/count`
pub fn me_updates_count() -> EndpointDescriptor {
    EndpointDescriptor::get("/user/me/updates/count")
}

/// `POST /user/me/updates/read/{id}`
pub fn me_updates_read_id(id: u64) -> EndpointDescriptor {
    EndpointDescriptor::post(format!("/user/me/updates/read/{}", id))
}

/// `POST /user/me/updates/read` with `ids` joined by `|`.
pub fn me_updates_read(ids: &[u64]) -> EndpointDescriptor {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("|");
    EndpointDescriptor::post("/user/me/updates/read").param("ids", joined)
}

/// `GET /user/{id}/comments`
pub fn comments(id: u64, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get(format!("/user/{}/comments", id)))
}

/// `GET /user/me/comments`
pub fn me_comments(page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get("/user/me/comments"))
}

/// `GET /user/{id}/entries`
pub fn entries(id: u64, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get(format!("/user/{}/entries", id)))
}

/// `GET /user/me/entries`
pub fn me_entries(page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get("/user/me/entries"))
}

/// `GET /user/{id}/favorites/entries`
pub fn favorites_entries(id: u64, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get(format!("/user/{}/favorites/entries", id)))
}

/// `GET /user/{id}/favorites/comments`
pub fn favorites_comments(id: u64, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get(format!("/user/{}/favorites/comments", id)))
}

/// `GET /user/me/favorites/entries`
pub fn me_favorites_entries(page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get("/user/me/favorites/entries"))
}

/// `GET /user/me/favorites/comments`
pub fn me_favorites_comments(page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get("/user/me/favorites/comments"))
}

/// `GET /user/me/favorites/vacancies`
pub fn me_favorites_vacancies(page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get("/user/me/favorites/vacancies"))
}

/// `GET /user/me/subscriptions/recommended`
pub fn me_subscriptions_recommended() -> EndpointDescriptor {
    EndpointDescriptor::get("/user/me/subscriptions/recommended")
}

/// `GET /user/me/subscriptions/subscribed`
pub fn me_subscriptions_subscribed() -> EndpointDescriptor {
    EndpointDescriptor::get("/user/me/subscriptions/subscribed")
}

/// `POST /user/me/favorites`
pub fn favorite_add(id: u64, kind: FavoriteType) -> EndpointDescriptor {
    EndpointDescriptor::post("/user/me/favorites")
        .param("id", id)
        .param("type", kind.value())
}

/// `POST /user/me/favorites/remove`
pub fn favorite_remove(id: u64, kind: FavoriteType) -> EndpointDescriptor {
    EndpointDescriptor::post("/user/me/favorites/remove")
        .param("id", id)
        .param("type", kind.value())
}

/// `GET /user/me/tunecatalog`
pub fn me_tune_catalog() -> EndpointDescriptor {
    EndpointDescriptor::get("/user/me/tunecatalog")
}

/// `POST /user/me/tunecatalog`; `settings` is sent as JSON text.
pub fn set_me_tune_catalog(settings: Value) -> EndpointDescriptor {
    EndpointDescriptor::post("/user/me/tunecatalog").param("settings", settings)
}

/// `GET /user/push/topic`
pub fn push_topic() -> EndpointDescriptor {
    EndpointDescriptor::get("/user/push/topic")
}

/// `GET /user/push/settings/get`
pub fn push_settings() -> EndpointDescriptor {
    EndpointDescriptor::get("/user/push/settings/get")
}

/// `POST /user/push/settings/update`; `settings` is a bit mask.
pub fn update_push_settings(settings: u64) -> EndpointDescriptor {
    EndpointDescriptor::post("/user/push/settings/update").param("settings", settings)
}
