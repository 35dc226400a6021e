//! GraphQL client types for Contentful API communication.
//!
//! This module provides the client layer for executing the crate's fixed
//! queries against the Contentful GraphQL Content API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ContentfulClient`]: The async GraphQL client
//! - [`QueryName`]: The closed set of supported queries, each with its
//!   static GraphQL document
//! - [`QueryOptions`]: Per-call options (preview, environment, delivery delay)
//! - [`ContentToken`]: Bearer token tagged with its scope (published/preview)
//! - [`GraphqlResponse`]: Raw response with status and full JSON body
//! - [`GraphqlError`]: Transport- and decode-level errors
//!
//! # Example
//!
//! ```rust,ignore
//! use contentful_graphql::{ContentfulClient, QueryName, QueryOptions};
//!
//! let client = ContentfulClient::new(config);
//!
//! // Typed accessor
//! let topics = client
//!     .get_topic_product_collection(&QueryOptions::default())
//!     .await?;
//!
//! // Raw access, for callers that want to inspect GraphQL errors
//! let response = client
//!     .execute(QueryName::Portfolio, &QueryOptions::new().preview(true))
//!     .await?;
//! if let Some(errors) = response.errors() {
//!     eprintln!("GraphQL errors: {errors}");
//! }
//! ```
//!
//! # No Retry, No Caching
//!
//! Each call issues exactly one request. Failures surface immediately; result
//! caching belongs to the external query-caching layer (see
//! [`hooks`](crate::hooks)).

mod errors;
mod graphql;
mod http;
mod options;
mod queries;
mod response;
mod token;

pub use errors::GraphqlError;
pub use graphql::ContentfulClient;
pub use options::QueryOptions;
pub use queries::QueryName;
pub use response::GraphqlResponse;
pub use token::{ContentToken, AUTH_HEADER_NAME};

/// The crate version, advertised in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
