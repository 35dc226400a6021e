//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Contentful space ID.
///
/// This newtype ensures the space ID is non-empty and alphanumeric, and
/// provides type safety to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::SpaceId;
///
/// let space = SpaceId::new("cfexampleapi").unwrap();
/// assert_eq!(space.as_ref(), "cfexampleapi");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceId(String);

impl SpaceId {
    /// Creates a new validated space ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySpaceId`] if the ID is empty, or
    /// [`ConfigError::InvalidSpaceId`] if it contains characters other
    /// than ASCII letters and digits.
    pub fn new(space_id: impl Into<String>) -> Result<Self, ConfigError> {
        let space_id = space_id.into();
        if space_id.is_empty() {
            return Err(ConfigError::EmptySpaceId);
        }
        if !space_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidSpaceId { space_id });
        }
        Ok(Self(space_id))
    }
}

impl AsRef<str> for SpaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Contentful access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs. The same type is used for
/// both the Content Delivery API (published) token and the Content Preview
/// API token; which one is sent is decided per request.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::AccessToken;
///
/// let token = AccessToken::new("my-delivery-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated host URL for the GraphQL endpoint.
///
/// This newtype validates that the URL has a proper scheme and a non-empty
/// host. It is used to override the default `https://graphql.contentful.com`
/// endpoint, for example to point the client at a local mock server or a
/// forwarding proxy.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::HostUrl;
///
/// let url = HostUrl::new("https://graphql.contentful.com").unwrap();
/// assert_eq!(url.scheme(), "https");
///
/// let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
/// assert_eq!(url.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// Any trailing slash is removed so the URL can be joined with request
    /// paths directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is missing a scheme
    /// or has an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host must be non-empty after "://"
        if scheme_end + 3 >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
