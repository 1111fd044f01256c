//! User resource implementation.
//!
//! This module provides the [`User`] profile, the reduced [`SearchUser`]
//! projection returned by user search, and the accessors and aggregation
//! helpers built on `GET /v1/users`.
//!
//! # Example
//!
//! ```rust,ignore
//! use polytoria_api::resources::{SearchUser, User, UserSearchParams, UserSort, SortOrder};
//!
//! // One page of search results
//! let params = UserSearchParams {
//!     search: Some("builder".to_string()),
//!     sort: Some(UserSort::RegisteredAt),
//!     order: Some(SortOrder::Desc),
//!     ..Default::default()
//! };
//! let users = SearchUser::list(&client, &params).await?;
//!
//! // More than one page
//! let many = SearchUser::list_many(&client, &params, 350).await?;
//!
//! // The first 10 staff members
//! let staff = SearchUser::list_matching(&client, 10, &params, |u| u.is_staff).await?;
//!
//! // Full profile including counters
//! let full = User::refresh(&client, &staff[0]).await?;
//! println!("{} has {} net worth", full.username, full.net_worth);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::PolytoriaClient;
use crate::error::ConfigError;
use crate::resources::codec::{decode_body, decode_field, serialize_to_query};
use crate::resources::paginate::{collect_matching, collect_pages, MAX_PAGE_LIMIT};
use crate::resources::ResourceError;

/// Membership tier of a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MembershipType {
    /// No paid membership.
    Free,
    /// Plus membership.
    Plus,
    /// Plus Deluxe membership.
    PlusDeluxe,
}

/// Avatar and icon image URLs of a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Thumbnail {
    /// URL of the full avatar render.
    pub avatar: String,
    /// URL of the headshot icon.
    pub icon: String,
}

/// A full user profile.
///
/// Returned by [`User::find`] and [`User::refresh`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier of the user.
    pub id: u64,
    /// The user's name.
    pub username: String,
    /// The profile description.
    #[serde(default)]
    pub description: Option<String>,
    /// Avatar and icon URLs.
    pub thumbnail: Thumbnail,
    /// The place the user is currently in, if any.
    #[serde(default)]
    pub playing: Option<u64>,
    /// The membership tier.
    pub membership_type: MembershipType,
    /// Whether the user is a staff member.
    pub is_staff: bool,
    /// When the account was registered.
    pub registered_at: DateTime<Utc>,
    /// When the user was last seen online.
    pub last_seen_at: DateTime<Utc>,
    /// Net worth in the site currency.
    pub net_worth: u64,
    /// Visits to the user's places.
    pub place_visits: u64,
    /// Visits to the user's profile.
    pub profile_visits: u64,
    /// Number of forum posts.
    pub forum_posts: u64,
    /// Number of asset sales.
    pub asset_sales: u64,
}

/// A user as returned by user search: a [`User`] without the counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchUser {
    /// The unique identifier of the user.
    pub id: u64,
    /// The user's name.
    pub username: String,
    /// The profile description.
    #[serde(default)]
    pub description: Option<String>,
    /// Avatar and icon URLs.
    pub thumbnail: Thumbnail,
    /// The place the user is currently in, if any.
    #[serde(default)]
    pub playing: Option<u64>,
    /// The membership tier.
    pub membership_type: MembershipType,
    /// Whether the user is a staff member.
    pub is_staff: bool,
    /// When the account was registered.
    pub registered_at: DateTime<Utc>,
    /// When the user was last seen online.
    pub last_seen_at: DateTime<Utc>,
}

impl From<User> for SearchUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            description: user.description,
            thumbnail: user.thumbnail,
            playing: user.playing,
            membership_type: user.membership_type,
            is_staff: user.is_staff,
            registered_at: user.registered_at,
            last_seen_at: user.last_seen_at,
        }
    }
}

/// Anything that identifies a user.
///
/// Lets [`User::refresh`] upgrade any partial projection (search result,
/// friend, leaderboard entry) to a full profile.
pub trait HasUserId {
    /// Returns the user's id.
    fn user_id(&self) -> u64;
}

impl HasUserId for u64 {
    fn user_id(&self) -> u64 {
        *self
    }
}

impl HasUserId for User {
    fn user_id(&self) -> u64 {
        self.id
    }
}

impl HasUserId for SearchUser {
    fn user_id(&self) -> u64 {
        self.id
    }
}

/// Sort keys accepted by user search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UserSort {
    /// Sort by id.
    Id,
    /// Sort by username.
    Username,
    /// Sort by registration time.
    RegisteredAt,
    /// Sort by last-seen time.
    LastSeenAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Parameters for user search.
///
/// `limit` must not exceed [`MAX_PAGE_LIMIT`] for [`SearchUser::list`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserSearchParams {
    /// Free-text search on the username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<UserSort>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size, at most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl User {
    /// The resource name used in errors.
    pub const NAME: &'static str = "User";

    /// Gets a user's full profile by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport or service failures and
    /// [`ResourceError::Decode`] if the body is not a user.
    pub async fn find(client: &PolytoriaClient, id: u64) -> Result<Self, ResourceError> {
        let response = client.get(&format!("users/{id}"), Vec::new()).await?;
        decode_body(&response.body, Self::NAME)
    }

    /// Gets the full profile of a user known only by a partial projection.
    ///
    /// # Errors
    ///
    /// Same as [`User::find`].
    pub async fn refresh(
        client: &PolytoriaClient,
        user: &impl HasUserId,
    ) -> Result<Self, ResourceError> {
        Self::find(client, user.user_id()).await
    }
}

impl SearchUser {
    /// The resource name used in errors.
    pub const NAME: &'static str = "SearchUser";

    /// Gets one page of user search results.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LimitTooLarge`] without sending a request if
    /// `params.limit` exceeds [`MAX_PAGE_LIMIT`]. Otherwise fails like any
    /// accessor with [`ResourceError::Http`] or a decode error.
    pub async fn list(
        client: &PolytoriaClient,
        params: &UserSearchParams,
    ) -> Result<Vec<Self>, ResourceError> {
        if let Some(limit) = params.limit {
            if limit > MAX_PAGE_LIMIT {
                return Err(ConfigError::LimitTooLarge {
                    limit,
                    max: MAX_PAGE_LIMIT,
                }
                .into());
            }
        }

        let query = serialize_to_query(params, Self::NAME)?;
        let response = client.get("users", query).await?;
        decode_field(&response.body, "users", Self::NAME)
    }

    /// Gets up to `count` search results across as many pages as needed.
    ///
    /// Counts up to [`MAX_PAGE_LIMIT`] are served by a single [`list`](Self::list)
    /// call. Larger counts walk pages of 100 starting at page 1; `params.page`
    /// and `params.limit` are ignored. Fewer than `count` users are returned
    /// if the search runs out first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RateLimitHandlingDisabled`] before any request
    /// if rate-limit handling is off. A failure on any page aborts the whole
    /// call.
    pub async fn list_many(
        client: &PolytoriaClient,
        params: &UserSearchParams,
        count: usize,
    ) -> Result<Vec<Self>, ResourceError> {
        require_rate_limit_handling(client, "SearchUser::list_many")?;

        if count == 0 {
            return Ok(Vec::new());
        }

        if let Ok(limit) = u32::try_from(count) {
            if limit <= MAX_PAGE_LIMIT {
                let single = UserSearchParams {
                    page: None,
                    limit: Some(limit),
                    ..params.clone()
                };
                return Self::list(client, &single).await;
            }
        }

        collect_pages(count, |page, limit| {
            let page_params = UserSearchParams {
                page: Some(page),
                limit: Some(limit),
                ..params.clone()
            };
            async move { Self::list(client, &page_params).await }
        })
        .await
    }

    /// Gets the first `count` search results satisfying `predicate`.
    ///
    /// Walks pages of 100 starting at page 1 until `count` matches are found
    /// or the search runs out; `params.page` and `params.limit` are ignored.
    /// Matches keep the order the API returned them in. This can take many
    /// requests for a rare predicate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RateLimitHandlingDisabled`] before any request
    /// if rate-limit handling is off. A failure on any page aborts the whole
    /// call.
    pub async fn list_matching<P>(
        client: &PolytoriaClient,
        count: usize,
        params: &UserSearchParams,
        predicate: P,
    ) -> Result<Vec<Self>, ResourceError>
    where
        P: FnMut(&Self) -> bool,
    {
        require_rate_limit_handling(client, "SearchUser::list_matching")?;

        collect_matching(
            count,
            |page, limit| {
                let page_params = UserSearchParams {
                    page: Some(page),
                    limit: Some(limit),
                    ..params.clone()
                };
                async move { Self::list(client, &page_params).await }
            },
            predicate,
        )
        .await
    }
}

fn require_rate_limit_handling(
    client: &PolytoriaClient,
    operation: &'static str,
) -> Result<(), ConfigError> {
    if client.config().handle_rate_limits() {
        Ok(())
    } else {
        Err(ConfigError::RateLimitHandlingDisabled { operation })
    }
}
