//! # Contentful GraphQL Client
//!
//! A small typed client for the Contentful GraphQL Content API, exposing a
//! fixed set of queries against one space and reshaping their results for a
//! UI data-fetching layer.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ContentfulConfig`] and [`ContentfulConfigBuilder`]
//! - Validated newtypes for the space ID and access tokens
//! - A closed, compile-time-checked set of queries via [`QueryName`]
//! - Preview vs. published token selection per call via [`QueryOptions`]
//! - Typed accessors producing [`TopicItem`] and [`PortfolioContent`] values
//! - Cache-keyed query objects for an external query-caching layer via
//!   [`hooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use contentful_graphql::{AccessToken, ContentfulClient, ContentfulConfig, SpaceId};
//!
//! // Create configuration using the builder pattern
//! let config = ContentfulConfig::builder()
//!     .space_id(SpaceId::new("cfexampleapi").unwrap())
//!     .delivery_token(AccessToken::new("published-token").unwrap())
//!     .preview_token(AccessToken::new("preview-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ContentfulClient::new(config);
//! ```
//!
//! ## Running Queries
//!
//! ```rust,ignore
//! use contentful_graphql::{Environment, QueryOptions};
//! use std::time::Duration;
//!
//! // Published topic products from the master environment
//! let topics = client
//!     .get_topic_product_collection(&QueryOptions::default())
//!     .await?;
//!
//! // Draft portfolio content from the dev environment, delivered no sooner
//! // than 250ms after the response arrives (for exercising loading states)
//! let options = QueryOptions::new()
//!     .preview(true)
//!     .environment(Environment::Dev)
//!     .delay(Duration::from_millis(250));
//! let content = client.get_portfolio(&options).await?;
//! ```
//!
//! ## Query Hook Integration
//!
//! The portfolio query plugs into an external query-caching abstraction as a
//! cache-keyed query object:
//!
//! ```rust,ignore
//! use contentful_graphql::hooks::PortfolioQuery;
//!
//! let query = PortfolioQuery::new(&client, QueryOptions::default());
//! assert_eq!(PortfolioQuery::CACHE_KEY, "portfolio");
//! let content = query.run().await?; // rejection carries {message}
//! ```
//!
//! ## Error Semantics
//!
//! Only transport failures and non-JSON bodies are errors. A non-2xx response
//! with a JSON body — including GraphQL `errors` payloads — resolves
//! successfully and must be inspected by the caller (see
//! [`client::GraphqlResponse`]). There is no retry, no timeout, and no
//! caching inside this crate.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;

// Re-export public types at crate root for convenience
pub use client::{
    ContentfulClient, GraphqlError, GraphqlResponse, QueryName, QueryOptions, SDK_VERSION,
};
pub use config::{
    AccessToken, ContentfulConfig, ContentfulConfigBuilder, Environment, HostUrl, SpaceId,
};
pub use content::{PortfolioCategory, PortfolioContent, PortfolioItem, TopicItem};
pub use error::ConfigError;
pub use hooks::{PortfolioQuery, QueryError};
