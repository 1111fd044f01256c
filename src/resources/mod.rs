//! Typed accessors for Polytoria resources.
//!
//! Each resource is a plain data type with associated async functions that
//! take a [`PolytoriaClient`](crate::PolytoriaClient), send one request per
//! page, and decode the payload out of its response envelope.
//!
//! # Overview
//!
//! - [`SearchUser`]: user search, plus the multi-page helpers
//!   [`SearchUser::list_many`] and [`SearchUser::list_matching`]
//! - [`User`]: full profiles via [`User::find`] and [`User::refresh`]
//! - [`Friendship`]: a user's friend list
//! - [`LeaderboardUser`]: leaderboard pages (requires a credential)
//!
//! # Preconditions
//!
//! Caller-side mistakes are reported as [`ResourceError::Config`] before any
//! request is sent:
//!
//! - a page `limit` over [`MAX_PAGE_LIMIT`]
//! - a multi-page helper with rate-limit handling disabled
//! - a leaderboard request without a credential

mod codec;
mod errors;
mod friend;
mod leaderboard;
pub mod paginate;
mod user;

pub use errors::ResourceError;
pub use friend::{FriendUser, FriendsParams, Friendship};
pub use leaderboard::{LeaderboardCategory, LeaderboardUser};
pub use paginate::MAX_PAGE_LIMIT;
pub use user::{
    HasUserId, MembershipType, SearchUser, SortOrder, Thumbnail, User, UserSearchParams, UserSort,
};
