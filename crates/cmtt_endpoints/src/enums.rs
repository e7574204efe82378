//! Closed parameter sets of the remote API.
//!
//! `Display` yields the exact text that appears in a path or parameter.

use serde::{Deserialize, Serialize};

/// Timeline category segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TimelineCategory {
    /// Front page of the platform
    #[display("index")]
    Index,
    /// Game development section
    #[display("gamedev")]
    Gamedev,
    /// Main page, used for hashtag feeds
    #[display("mainpage")]
    Mainpage,
}

/// Timeline ordering segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TimelineSorting {
    #[display("recent")]
    Recent,
    #[display("popular")]
    Popular,
    #[display("week")]
    Week,
    #[display("month")]
    Month,
}

/// Comment tree ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CommentsSorting {
    #[display("recent")]
    Recent,
    #[display("popular")]
    Popular,
}

/// Ordering of the leveled comment listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CommentsSortingLevel {
    #[display("date")]
    Date,
    #[display("popular")]
    Popular,
}

/// Search result ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    #[display("relevant")]
    Relevant,
    #[display("date")]
    Date,
}

/// Tweet feed period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TweetsMode {
    #[display("fresh")]
    Fresh,
    #[display("day")]
    Day,
    #[display("week")]
    Week,
    #[display("month")]
    Month,
}

/// Suffix appended directly to `/subsite/{id}/timeline`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
pub enum SubsiteTimelineSorting {
    #[display("/top/week")]
    TopWeek,
    #[display("/top/month")]
    TopMonth,
    #[display("/top/year")]
    TopYear,
    #[display("/top/all")]
    TopAll,
    #[display("/new")]
    New,
    /// Default ordering, no suffix
    #[default]
    #[display("")]
    Default,
}

/// Kind of subsite listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SubsitesListType {
    #[display("sections")]
    Sections,
    #[display("companies")]
    Companies,
}

/// What a like applies to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum LikeEntryType {
    #[display("content")]
    Content,
    #[display("comment")]
    Comment,
}

/// Vote direction, sent as `1`, `0` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum LikeSign {
    #[display("1")]
    Like,
    /// Withdraw a previous vote
    #[display("0")]
    Unlike,
    #[display("-1")]
    Dislike,
}

impl LikeSign {
    /// Numeric wire value.
    pub fn value(self) -> i8 {
        match self {
            Self::Like => 1,
            Self::Unlike => 0,
            Self::Dislike => -1,
        }
    }
}

/// Favorite target kind, sent as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum FavoriteType {
    #[display("1")]
    Entry,
    #[display("2")]
    Comment,
}

impl FavoriteType {
    /// Numeric wire value.
    pub fn value(self) -> u8 {
        match self {
            Self::Entry => 1,
            Self::Comment => 2,
        }
    }
}

/// Mute toggle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MuteAction {
    #[display("mute")]
    Mute,
    #[display("unmute")]
    Unmute,
}
