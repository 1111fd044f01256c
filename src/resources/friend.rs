//! Friend list resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use polytoria_api::resources::{FriendsParams, Friendship, User};
//!
//! let friends = Friendship::list(&client, &FriendsParams::new(1).page(2)).await?;
//! for friendship in &friends {
//!     println!("{} since {}", friendship.user.username, friendship.accepted_at);
//! }
//! let full = User::refresh(&client, &friends[0]).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::PolytoriaClient;
use crate::error::ConfigError;
use crate::resources::codec::{decode_field, serialize_to_query};
use crate::resources::paginate::MAX_PAGE_LIMIT;
use crate::resources::{HasUserId, ResourceError};

/// The reduced user projection embedded in a [`Friendship`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendUser {
    /// The unique identifier of the friend.
    pub id: u64,
    /// The friend's name.
    pub username: String,
    /// URL of the friend's headshot icon.
    pub thumbnail: String,
}

/// An accepted friendship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    /// When the friend request was accepted.
    pub accepted_at: DateTime<Utc>,
    /// The other side of the friendship.
    pub user: FriendUser,
}

impl HasUserId for FriendUser {
    fn user_id(&self) -> u64 {
        self.id
    }
}

impl HasUserId for Friendship {
    fn user_id(&self) -> u64 {
        self.user.id
    }
}

/// Parameters for listing a user's friends.
///
/// `id` goes into the request path; `page` and `limit` into the query.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FriendsParams {
    /// The user whose friends are listed.
    #[serde(skip_serializing)]
    pub id: u64,

    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size, at most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl FriendsParams {
    /// Creates parameters for the first page of `id`'s friends.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            page: None,
            limit: None,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Friendship {
    /// The resource name used in errors.
    pub const NAME: &'static str = "Friendship";

    /// Gets one page of a user's friendships.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LimitTooLarge`] without sending a request if
    /// `params.limit` exceeds [`MAX_PAGE_LIMIT`], [`ResourceError::Http`] for
    /// transport or service failures, and a decode error if the body has no
    /// `friends` list.
    pub async fn list(
        client: &PolytoriaClient,
        params: &FriendsParams,
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
        let path = format!("users/{}/friends", params.id);
        let response = client.get(&path, query).await?;
        decode_field(&response.body, "friends", Self::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_friendship_deserialization() {
        let value = json!({
            "acceptedAt": "2023-07-14T18:02:11.000Z",
            "user": {
                "id": 23,
                "username": "Bob",
                "thumbnail": "https://c0.ptacdn.com/thumbnails/avatars/23-icon.png"
            }
        });
        let friendship: Friendship = serde_json::from_value(value).unwrap();

        assert_eq!(friendship.user.id, 23);
        assert_eq!(friendship.user.username, "Bob");
        assert_eq!(friendship.accepted_at.to_rfc3339(), "2023-07-14T18:02:11+00:00");
        assert_eq!(friendship.user_id(), 23);
    }

    #[test]
    fn test_id_is_not_sent_in_query() {
        let params = FriendsParams::new(7).page(2).limit(50);
        let query = serialize_to_query(&params, Friendship::NAME).unwrap();

        assert_eq!(
            query,
            vec![
                ("limit".to_string(), "50".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_params_produce_empty_query() {
        let query = serialize_to_query(&FriendsParams::new(7), Friendship::NAME).unwrap();
        assert!(query.is_empty());
    }
}
