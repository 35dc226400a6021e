//! Configuration types for the Contentful GraphQL client.
//!
//! This module provides the core configuration types used to initialize
//! the client for communication with the Contentful GraphQL Content API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ContentfulConfig`]: The main configuration struct holding the space
//!   credentials and endpoint settings
//! - [`ContentfulConfigBuilder`]: A builder for constructing [`ContentfulConfig`] instances
//! - [`SpaceId`]: A validated space ID newtype
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`HostUrl`]: A validated endpoint override URL
//! - [`Environment`]: The Contentful environment a query targets
//!
//! # Example
//!
//! ```rust
//! use contentful_graphql::{ContentfulConfig, SpaceId, AccessToken};
//!
//! let config = ContentfulConfig::builder()
//!     .space_id(SpaceId::new("cfexampleapi").unwrap())
//!     .delivery_token(AccessToken::new("published-token").unwrap())
//!     .preview_token(AccessToken::new("preview-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::{AccessToken, HostUrl, SpaceId};

use crate::error::ConfigError;

/// Configuration for the Contentful GraphQL client.
///
/// This struct holds everything needed to reach one Contentful space: the
/// space ID and the two pre-provisioned access tokens (published delivery
/// content vs. preview content). It is supplied once when constructing a
/// [`ContentfulClient`](crate::ContentfulClient) and is immutable afterwards;
/// there is no hidden process-wide instance.
///
/// # Thread Safety
///
/// `ContentfulConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::{ContentfulConfig, SpaceId, AccessToken};
///
/// let config = ContentfulConfig::builder()
///     .space_id(SpaceId::new("cfexampleapi").unwrap())
///     .delivery_token(AccessToken::new("published-token").unwrap())
///     .preview_token(AccessToken::new("preview-token").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.space_id().as_ref(), "cfexampleapi");
/// ```
#[derive(Clone, Debug)]
pub struct ContentfulConfig {
    space_id: SpaceId,
    delivery_token: AccessToken,
    preview_token: AccessToken,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ContentfulConfig {
    /// Creates a new builder for constructing a `ContentfulConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contentful_graphql::{ContentfulConfig, SpaceId, AccessToken};
    ///
    /// let config = ContentfulConfig::builder()
    ///     .space_id(SpaceId::new("space1").unwrap())
    ///     .delivery_token(AccessToken::new("cda").unwrap())
    ///     .preview_token(AccessToken::new("cpa").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ContentfulConfigBuilder {
        ContentfulConfigBuilder::new()
    }

    /// Returns the space ID.
    #[must_use]
    pub const fn space_id(&self) -> &SpaceId {
        &self.space_id
    }

    /// Returns the Content Delivery API token (published content).
    #[must_use]
    pub const fn delivery_token(&self) -> &AccessToken {
        &self.delivery_token
    }

    /// Returns the Content Preview API token (draft content).
    #[must_use]
    pub const fn preview_token(&self) -> &AccessToken {
        &self.preview_token
    }

    /// Returns the endpoint override, if configured.
    ///
    /// When unset, requests go to `https://graphql.contentful.com`.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ContentfulConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentfulConfig>();
};

/// Builder for constructing [`ContentfulConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `space_id`, `delivery_token`, and `preview_token`. All other
/// fields have sensible defaults.
///
/// # Defaults
///
/// - `api_host`: `None` (requests go to `https://graphql.contentful.com`)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use contentful_graphql::{ContentfulConfig, SpaceId, AccessToken, HostUrl};
///
/// let config = ContentfulConfig::builder()
///     .space_id(SpaceId::new("cfexampleapi").unwrap())
///     .delivery_token(AccessToken::new("published-token").unwrap())
///     .preview_token(AccessToken::new("preview-token").unwrap())
///     .api_host(HostUrl::new("https://graphql.eu.contentful.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ContentfulConfigBuilder {
    space_id: Option<SpaceId>,
    delivery_token: Option<AccessToken>,
    preview_token: Option<AccessToken>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ContentfulConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the space ID (required).
    #[must_use]
    pub fn space_id(mut self, space_id: SpaceId) -> Self {
        self.space_id = Some(space_id);
        self
    }

    /// Sets the Content Delivery API token for published content (required).
    #[must_use]
    pub fn delivery_token(mut self, token: AccessToken) -> Self {
        self.delivery_token = Some(token);
        self
    }

    /// Sets the Content Preview API token for draft content (required).
    #[must_use]
    pub fn preview_token(mut self, token: AccessToken) -> Self {
        self.preview_token = Some(token);
        self
    }

    /// Sets an endpoint override.
    ///
    /// Useful for regional endpoints, forwarding proxies, or pointing the
    /// client at a mock server in tests.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ContentfulConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `space_id`,
    /// `delivery_token`, or `preview_token` are not set.
    pub fn build(self) -> Result<ContentfulConfig, ConfigError> {
        let space_id = self
            .space_id
            .ok_or(ConfigError::MissingRequiredField { field: "space_id" })?;
        let delivery_token = self
            .delivery_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "delivery_token",
            })?;
        let preview_token = self
            .preview_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "preview_token",
            })?;

        Ok(ContentfulConfig {
            space_id,
            delivery_token,
            preview_token,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
