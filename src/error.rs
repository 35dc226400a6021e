//! Error types for the Contentful GraphQL client.
//!
//! This module contains error types for configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use contentful_graphql::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Space ID cannot be empty.
    #[error("Space ID cannot be empty. Please provide a valid Contentful space ID.")]
    EmptySpaceId,

    /// Space ID contains invalid characters.
    #[error("Invalid space ID '{space_id}'. Space IDs contain only ASCII letters and digits.")]
    InvalidSpaceId {
        /// The invalid space ID that was provided.
        space_id: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Contentful access token.")]
    EmptyAccessToken,

    /// Environment name is not recognized.
    #[error("Invalid environment '{value}'. Expected 'master' or 'dev'.")]
    InvalidEnvironment {
        /// The invalid environment name that was provided.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://graphql.contentful.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
