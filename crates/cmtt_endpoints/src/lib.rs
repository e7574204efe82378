//! Typed catalog of the TJournal, DTF and VC API.
//!
//! Every function returns an [`EndpointDescriptor`](cmtt_core::EndpointDescriptor)
//! and performs no I/O; hand the descriptor to a dispatcher to send it.
//! Optional arguments left as `None` are not sent.
//!
//! ```
//! use cmtt_core::HttpMethod;
//! use cmtt_endpoints::{Page, TimelineCategory, TimelineSorting, timeline};
//!
//! let descriptor = timeline::timeline(
//!     TimelineCategory::Index,
//!     TimelineSorting::Popular,
//!     Page::first(10),
//! );
//! assert_eq!(descriptor.method(), &HttpMethod::Get);
//! assert_eq!(descriptor.path(), "/timeline/index/popular");
//! ```

#![forbid(unsafe_code)]

mod enums;
mod page;

pub mod comment;
pub mod entry;
pub mod misc;
pub mod subsite;
pub mod timeline;
pub mod uploader;
pub mod user;
pub mod webhooks;

pub use enums::{
    CommentsSorting, CommentsSortingLevel, FavoriteType, LikeEntryType, LikeSign, MuteAction, SearchOrder,
    SubsiteTimelineSorting, SubsitesListType, TimelineCategory, TimelineSorting, TweetsMode,
};
pub use page::Page;
