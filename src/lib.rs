//! # Polytoria API Rust Client
//!
//! A Rust client for the Polytoria game platform's public and internal HTTP
//! APIs, providing typed accessors for user profiles, user search, friend
//! lists, and leaderboards.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PolytoriaConfig`] and [`PolytoriaConfigBuilder`]
//! - A pluggable session [`Credential`], with [`AuthCookie`] as the default
//! - An async HTTP client that transparently retries rate-limited requests
//! - Normalization of service-reported errors into [`HttpError::Service`]
//! - Typed resource accessors in [`resources`]
//! - Multi-page helpers that aggregate or filter search results beyond one page
//!
//! ## Quick Start
//!
//! ```rust
//! use polytoria_api::{PolytoriaClient, PolytoriaConfig};
//!
//! let config = PolytoriaConfig::builder()
//!     .user_agent_prefix("my-bot/1.0")
//!     .build();
//! let client = PolytoriaClient::new(config).unwrap();
//! assert!(client.config().handle_rate_limits());
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use polytoria_api::{PolytoriaClient, PolytoriaConfig};
//! use polytoria_api::resources::{SearchUser, User, UserSearchParams};
//!
//! let client = PolytoriaClient::new(PolytoriaConfig::default())?;
//!
//! let user = User::find(&client, 1).await?;
//! println!("{} joined {}", user.username, user.registered_at);
//!
//! // 250 users across three requests
//! let users = SearchUser::list_many(&client, &UserSearchParams::default(), 250).await?;
//! ```
//!
//! ## Internal API
//!
//! The leaderboard is served by the website's internal API and needs a
//! session cookie:
//!
//! ```rust,ignore
//! use polytoria_api::{AuthCookie, PolytoriaClient, PolytoriaConfig};
//! use polytoria_api::resources::{LeaderboardCategory, LeaderboardUser};
//!
//! let config = PolytoriaConfig::builder()
//!     .auth_cookie(AuthCookie::new(std::env::var("PT_AUTH")?)?)
//!     .build();
//! let client = PolytoriaClient::new(config)?;
//! let top = LeaderboardUser::page(&client, LeaderboardCategory::Visits, 1).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction, and caller
//!   mistakes surface as [`ConfigError`] before any request is sent
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Sequential**: The crate never issues two requests concurrently

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{AuthCookie, BaseUrl, Credential, PolytoriaConfig, PolytoriaConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, PolytoriaClient,
    ServiceError,
};

// Re-export resource types
pub use resources::{
    FriendsParams, Friendship, LeaderboardCategory, LeaderboardUser, ResourceError, SearchUser,
    User, UserSearchParams,
};
