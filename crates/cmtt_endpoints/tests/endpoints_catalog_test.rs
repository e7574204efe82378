//! Catalog paths, methods and parameters.

use cmtt_core::{EndpointDescriptor, HttpMethod};
use cmtt_endpoints::{
    CommentsSorting, CommentsSortingLevel, FavoriteType, LikeEntryType, LikeSign, MuteAction, Page,
    SearchOrder, SubsiteTimelineSorting, SubsitesListType, TimelineCategory, TimelineSorting,
    TweetsMode, comment, entry, misc, subsite, timeline, uploader, user, webhooks,
};
use serde_json::{Value, json};
use std::path::PathBuf;

fn present(descriptor: &EndpointDescriptor) -> Vec<(String, Value)> {
    descriptor
        .params()
        .present()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

fn assert_route(descriptor: &EndpointDescriptor, method: HttpMethod, path: &str) {
    assert_eq!(descriptor.method(), &method, "method of {}", path);
    assert_eq!(descriptor.path(), path);
}

#[test]
fn test_timeline_routes() {
    let feed = timeline::timeline(TimelineCategory::Gamedev, TimelineSorting::Week, Page::new(20, 40));
    assert_route(&feed, HttpMethod::Get, "/timeline/gamedev/week");
    assert_eq!(
        present(&feed),
        vec![
            ("count".to_string(), json!(20)),
            ("offset".to_string(), json!(40))
        ]
    );

    let tagged = timeline::timeline_by_hashtag("rust", Page::default());
    assert_route(&tagged, HttpMethod::Get, "/timeline/mainpage");
    assert_eq!(present(&tagged), vec![("hashtag".to_string(), json!("rust"))]);

    assert_route(&timeline::news(Page::first(5)), HttpMethod::Get, "/news/default/recent");
    assert_route(&timeline::flashholder(), HttpMethod::Get, "/getflashholdedentry");
}

#[test]
fn test_entry_routes() {
    assert_route(&entry::by_id(42), HttpMethod::Get, "/entry/42");
    assert_route(&entry::popular(42), HttpMethod::Get, "/entry/42/popular");
    assert_route(&entry::locate("https://vc.ru/x"), HttpMethod::Get, "/entry/locate");
    assert_route(&entry::complaint(1), HttpMethod::Post, "/entry/complaint");
    assert_route(&entry::comment_complaint(1), HttpMethod::Post, "/entry/comment/complaint");

    let like = entry::like(7, LikeEntryType::Comment, LikeSign::Dislike);
    assert_route(&like, HttpMethod::Post, "/like");
    assert_eq!(
        present(&like),
        vec![
            ("id".to_string(), json!(7)),
            ("type".to_string(), json!("comment")),
            ("sign".to_string(), json!(-1)),
        ]
    );

    let plain = entry::create("Title", "Body", 3, None);
    assert_route(&plain, HttpMethod::Post, "/entry/create");
    assert!(plain.params().get("attachments").is_some_and(Value::is_null));

    let blocks = entry::create_with_blocks("Title", r#"{"blocks":[]}"#, 3);
    assert_eq!(blocks.params().get("entry"), Some(&json!(r#"{"blocks":[]}"#)));
}

#[test]
fn test_comment_routes() {
    assert_route(
        &comment::entry_comments(5, CommentsSorting::Popular),
        HttpMethod::Get,
        "/entry/5/comments/popular",
    );
    assert_route(
        &comment::entry_comments_levels(5, CommentsSortingLevel::Date),
        HttpMethod::Get,
        "/entry/5/comments/levels/date",
    );
    assert_route(&comment::thread(5, 9), HttpMethod::Get, "/entry/5/comments/thread/9");
    assert_route(&comment::likers(9), HttpMethod::Get, "/comment/likers/9");
    assert_route(&comment::edit(9, 5, Some("fixed")), HttpMethod::Post, "/comment/edit/9/5");
    assert_route(
        &comment::save_seen_count(5, 12),
        HttpMethod::Post,
        "/comment/saveCommentsSeenCount",
    );
}

#[test]
fn test_comment_send_defaults_reply_to_zero() {
    let top_level = comment::send(86279, "api test", None, None);
    assert_route(&top_level, HttpMethod::Post, "/comment/add");
    assert_eq!(
        present(&top_level),
        vec![
            ("id".to_string(), json!(86279)),
            ("text".to_string(), json!("api test")),
            ("reply_to".to_string(), json!(0)),
        ]
    );

    let attachments = json!([{"type": "image", "data": {"uuid": "u"}}]);
    let reply = comment::send(86279, "re", Some(11), Some(attachments.clone()));
    assert_eq!(reply.params().get("reply_to"), Some(&json!(11)));
    assert_eq!(reply.params().get("attachments"), Some(&attachments));
}

#[test]
fn test_uploader_routes() {
    let upload = uploader::upload("/tmp/mars.jpg");
    assert_route(&upload, HttpMethod::Post, "/uploader/upload");
    assert_eq!(upload.file(), &Some(PathBuf::from("/tmp/mars.jpg")));
    assert!(upload.params().is_empty());

    let extract = uploader::extract("https://example.com/a.png");
    assert_route(&extract, HttpMethod::Post, "/uploader/extract");
    assert_eq!(extract.file(), &None);
}

#[test]
fn test_user_routes() {
    assert_route(&user::by_id(1), HttpMethod::Get, "/user/1");
    assert_route(&user::me(), HttpMethod::Get, "/user/me");
    assert_route(&user::me_updates_count(), HttpMethod::Get, "/user/me/updates/count");
    assert_route(&user::me_updates_read_id(3), HttpMethod::Post, "/user/me/updates/read/3");
    assert_route(&user::comments(1, Page::default()), HttpMethod::Get, "/user/1/comments");
    assert_route(&user::me_comments(Page::default()), HttpMethod::Get, "/user/me/comments");
    assert_route(&user::entries(1, Page::default()), HttpMethod::Get, "/user/1/entries");
    assert_route(&user::me_entries(Page::default()), HttpMethod::Get, "/user/me/entries");
    assert_route(
        &user::favorites_entries(1, Page::default()),
        HttpMethod::Get,
        "/user/1/favorites/entries",
    );
    assert_route(
        &user::favorites_comments(1, Page::default()),
        HttpMethod::Get,
        "/user/1/favorites/comments",
    );
    assert_route(
        &user::me_favorites_entries(Page::default()),
        HttpMethod::Get,
        "/user/me/favorites/entries",
    );
    assert_route(
        &user::me_favorites_comments(Page::default()),
        HttpMethod::Get,
        "/user/me/favorites/comments",
    );
    assert_route(
        &user::me_favorites_vacancies(Page::default()),
        HttpMethod::Get,
        "/user/me/favorites/vacancies",
    );
    assert_route(
        &user::me_subscriptions_recommended(),
        HttpMethod::Get,
        "/user/me/subscriptions/recommended",
    );
    assert_route(
        &user::me_subscriptions_subscribed(),
        HttpMethod::Get,
        "/user/me/subscriptions/subscribed",
    );
    assert_route(&user::me_tune_catalog(), HttpMethod::Get, "/user/me/tunecatalog");
    assert_route(
        &user::set_me_tune_catalog(json!({"hide": [1]})),
        HttpMethod::Post,
        "/user/me/tunecatalog",
    );
    assert_route(&user::push_topic(), HttpMethod::Get, "/user/push/topic");
    assert_route(&user::push_settings(), HttpMethod::Get, "/user/push/settings/get");
    assert_route(
        &user::update_push_settings(7),
        HttpMethod::Post,
        "/user/push/settings/update",
    );
}

#[test]
fn test_user_updates_params() {
    let updates = user::me_updates(5, None, None);
    assert_route(&updates, HttpMethod::Get, "/user/me/updates");
    assert_eq!(
        present(&updates),
        vec![("id".to_string(), json!(5)), ("is_read".to_string(), json!(1))]
    );

    let read = user::me_updates_read(&[1, 22, 333]);
    assert_route(&read, HttpMethod::Post, "/user/me/updates/read");
    assert_eq!(read.params().get("ids"), Some(&json!("1|22|333")));
}

#[test]
fn test_favorites_send_numeric_type() {
    let add = user::favorite_add(10, FavoriteType::Comment);
    assert_route(&add, HttpMethod::Post, "/user/me/favorites");
    assert_eq!(add.params().get("type"), Some(&json!(2)));

    let remove = user::favorite_remove(10, FavoriteType::Entry);
    assert_route(&remove, HttpMethod::Post, "/user/me/favorites/remove");
    assert_eq!(remove.params().get("type"), Some(&json!(1)));
}

#[test]
fn test_subsite_routes() {
    assert_route(
        &subsite::timeline(64, SubsiteTimelineSorting::TopMonth, Page::default()),
        HttpMethod::Get,
        "/subsite/64/timeline/top/month",
    );
    assert_route(
        &subsite::timeline(64, SubsiteTimelineSorting::Default, Page::default()),
        HttpMethod::Get,
        "/subsite/64/timeline",
    );
    assert_route(
        &subsite::list(SubsitesListType::Companies),
        HttpMethod::Get,
        "/subsites_list/companies",
    );
    assert_route(&subsite::vacancies(64), HttpMethod::Get, "/subsite/64/vacancies");
    assert_route(
        &subsite::vacancies_more(64, 100),
        HttpMethod::Get,
        "/subsite/64/vacancies/more/100",
    );
    assert_route(&subsite::subscribe(64), HttpMethod::Get, "/subsite/64/subscribe");
    assert_route(&subsite::unsubscribe(64), HttpMethod::Get, "/subsite/64/unsubscribe");

    let mute = subsite::mute(MuteAction::Unmute, 64);
    assert_route(&mute, HttpMethod::Post, "/subsite/mute");
    assert_eq!(mute.params().get("action"), Some(&json!("unmute")));
}

#[test]
fn test_webhook_event_defaults() {
    assert_route(&webhooks::list(), HttpMethod::Get, "/webhooks/get");

    let add = webhooks::add("https://example.com/hook", None);
    assert_route(&add, HttpMethod::Post, "/webhooks/add");
    assert_eq!(add.params().get("event"), Some(&json!("new_comment")));

    let delete = webhooks::delete(Some("new_entry"));
    assert_route(&delete, HttpMethod::Post, "/webhooks/del");
    assert_eq!(delete.params().get("event"), Some(&json!("new_entry")));
}

#[test]
fn test_misc_routes() {
    assert_route(&misc::locate("https://dtf.ru/x"), HttpMethod::Get, "/locate");
    assert_route(&misc::layout(3), HttpMethod::Get, "/layout/3");
    assert_route(&misc::layout_hashtag("news"), HttpMethod::Get, "/layout/hashtag/news");
    assert_route(&misc::payments_check(), HttpMethod::Get, "/payments/check");
    assert_route(&misc::tweets(TweetsMode::Day, Page::default()), HttpMethod::Get, "/tweets/day");
    assert_route(&misc::rates(), HttpMethod::Get, "/rates");
    assert_route(&misc::job(), HttpMethod::Get, "/job");
    assert_route(&misc::job_more(8), HttpMethod::Get, "/job/more/8");
    assert_route(&misc::job_filters(), HttpMethod::Get, "/job/filters");
    assert_route(&misc::vacancies(), HttpMethod::Get, "/vacancies/widget");
    assert_route(&misc::content_mute(MuteAction::Mute, 1), HttpMethod::Post, "/content/mute");
    assert_route(&misc::hashtag_mute(MuteAction::Mute, 1), HttpMethod::Post, "/hashtag/mute");
}

#[test]
fn test_search_skips_unset_options() {
    let bare = misc::search("rust", None, None);
    assert_route(&bare, HttpMethod::Get, "/search");
    assert_eq!(present(&bare), vec![("query".to_string(), json!("rust"))]);

    let ordered = misc::search("rust", Some(SearchOrder::Date), Some(2));
    assert_eq!(
        present(&ordered),
        vec![
            ("query".to_string(), json!("rust")),
            ("order_by".to_string(), json!("date")),
            ("page".to_string(), json!(2)),
        ]
    );
}
