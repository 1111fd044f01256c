//! Leaderboard resource implementation.
//!
//! The leaderboard lives on the website's internal API rather than the
//! public one, and requires a session credential.
//!
//! # Example
//!
//! ```rust,ignore
//! use polytoria_api::{AuthCookie, PolytoriaClient, PolytoriaConfig};
//! use polytoria_api::resources::{LeaderboardCategory, LeaderboardUser};
//!
//! let config = PolytoriaConfig::builder()
//!     .auth_cookie(AuthCookie::new("session-cookie")?)
//!     .build();
//! let client = PolytoriaClient::new(config)?;
//!
//! for entry in LeaderboardUser::page(&client, LeaderboardCategory::Networth, 1).await? {
//!     println!("#{} {} ({})", entry.rank, entry.username, entry.statistic);
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::PolytoriaClient;
use crate::error::ConfigError;
use crate::resources::codec::decode_field;
use crate::resources::{HasUserId, ResourceError};

/// The statistic a leaderboard ranks users by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardCategory {
    /// Net worth.
    Networth,
    /// Place visits.
    Visits,
    /// Asset sales.
    Sales,
    /// Forum posts.
    Forumposts,
    /// Profile views.
    Profileviews,
}

impl LeaderboardCategory {
    /// Returns the wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Networth => "networth",
            Self::Visits => "visits",
            Self::Sales => "sales",
            Self::Forumposts => "forumposts",
            Self::Profileviews => "profileviews",
        }
    }
}

impl fmt::Display for LeaderboardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked entry of a leaderboard page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardUser {
    /// The unique identifier of the user.
    pub id: u64,
    /// The user's name.
    pub username: String,
    /// Identifier of the user's avatar render.
    #[serde(rename = "avatarID")]
    pub avatar_id: String,
    /// URL of the user's profile page.
    pub profile_url: String,
    /// URL of the user's avatar render.
    pub avatar_url: String,
    /// The value of the ranked statistic.
    pub statistic: f64,
    /// The 1-based rank.
    pub rank: u32,
}

impl HasUserId for LeaderboardUser {
    fn user_id(&self) -> u64 {
        self.id
    }
}

impl LeaderboardUser {
    /// The resource name used in errors.
    pub const NAME: &'static str = "LeaderboardUser";

    /// Gets one page of the leaderboard for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] without sending a request
    /// if no credential is configured. Otherwise fails like any accessor with
    /// [`ResourceError::Http`] or a decode error.
    pub async fn page(
        client: &PolytoriaClient,
        category: LeaderboardCategory,
        page: u32,
    ) -> Result<Vec<Self>, ResourceError> {
        if !client.config().has_credential() {
            return Err(ConfigError::MissingCredential {
                operation: "LeaderboardUser::page",
            }
            .into());
        }

        let query = vec![
            ("category".to_string(), category.as_str().to_string()),
            ("page".to_string(), page.to_string()),
        ];
        let response = client.get_internal("rankings", query).await?;
        decode_field(&response.body, "data", Self::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PolytoriaConfig;
    use serde_json::json;

    #[test]
    fn test_category_wire_names_match_serde() {
        for category in [
            LeaderboardCategory::Networth,
            LeaderboardCategory::Visits,
            LeaderboardCategory::Sales,
            LeaderboardCategory::Forumposts,
            LeaderboardCategory::Profileviews,
        ] {
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                json!(category.as_str())
            );
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_leaderboard_user_deserialization() {
        let value = json!({
            "id": 5,
            "username": "Rich",
            "avatarID": "a1b2c3",
            "profileUrl": "https://polytoria.com/users/5",
            "avatarUrl": "https://c0.ptacdn.com/thumbnails/avatars/a1b2c3.png",
            "statistic": 9_000_000,
            "rank": 1
        });
        let entry: LeaderboardUser = serde_json::from_value(value).unwrap();

        assert_eq!(entry.avatar_id, "a1b2c3");
        assert_eq!(entry.rank, 1);
        assert!((entry.statistic - 9_000_000.0).abs() < f64::EPSILON);
        assert_eq!(entry.user_id(), 5);
    }

    #[tokio::test]
    async fn test_page_requires_credential() {
        let client = PolytoriaClient::new(PolytoriaConfig::default()).unwrap();
        let result = LeaderboardUser::page(&client, LeaderboardCategory::Sales, 1).await;

        assert!(matches!(
            result,
            Err(ResourceError::Config(ConfigError::MissingCredential {
                operation: "LeaderboardUser::page"
            }))
        ));
    }
}
