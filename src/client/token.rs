//! Access token selection for Contentful GraphQL requests.
//!
//! This module provides the [`ContentToken`] enum for type-safe bearer
//! authentication with the Contentful GraphQL Content API.
//!
//! # Token Scopes
//!
//! Contentful provisions two tokens per space, both sent as a standard
//! `Authorization: Bearer` header:
//!
//! - **Published** (Content Delivery API token): serves only published entries.
//! - **Preview** (Content Preview API token): serves draft and published entries.
//!
//! Which scope is used is decided per query via
//! [`QueryOptions::preview`](crate::QueryOptions).
//!
//! # Security
//!
//! [`ContentToken`] implements a custom [`Debug`] that masks the token value,
//! preventing accidental exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use contentful_graphql::client::ContentToken;
//!
//! let token = ContentToken::Published("delivery-token".to_string());
//! assert_eq!(token.header_name(), "Authorization");
//! assert_eq!(token.header_value(), "Bearer delivery-token");
//!
//! // Debug output masks the token value
//! let debug = format!("{:?}", token);
//! assert!(debug.contains("*****"));
//! assert!(!debug.contains("delivery-token"));
//! ```

use std::fmt;

/// HTTP header name used for both token scopes.
pub const AUTH_HEADER_NAME: &str = "Authorization";

/// A Contentful GraphQL access token, tagged with its scope.
///
/// Both variants authenticate with the same `Authorization: Bearer` header;
/// the scope only determines which dataset view the API serves.
///
/// # Security
///
/// The [`Debug`] implementation masks token values to prevent accidental
/// exposure:
///
/// ```rust
/// use contentful_graphql::client::ContentToken;
///
/// let token = ContentToken::Preview("secret".to_string());
/// assert_eq!(format!("{:?}", token), "ContentToken::Preview(*****)");
/// ```
#[derive(Clone)]
pub enum ContentToken {
    /// Content Delivery API token, serving published content only.
    Published(String),

    /// Content Preview API token, serving draft and published content.
    Preview(String),
}

impl ContentToken {
    /// Returns the HTTP header name for this token.
    ///
    /// Always `Authorization`; both scopes use standard bearer authentication.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        AUTH_HEADER_NAME
    }

    /// Returns the HTTP header value, in `Bearer <token>` form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contentful_graphql::client::ContentToken;
    ///
    /// let token = ContentToken::Preview("my-token".to_string());
    /// assert_eq!(token.header_value(), "Bearer my-token");
    /// ```
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Published(token) | Self::Preview(token) => format!("Bearer {token}"),
        }
    }

    /// Returns `true` if this is a preview-scope token.
    #[must_use]
    pub const fn is_preview(&self) -> bool {
        matches!(self, Self::Preview(_))
    }
}

impl fmt::Debug for ContentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Published(_) => f.write_str("ContentToken::Published(*****)"),
            Self::Preview(_) => f.write_str("ContentToken::Preview(*****)"),
        }
    }
}
