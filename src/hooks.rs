//! Cache-keyed query objects for an external query-caching layer.
//!
//! A query hook pairs a stable cache key with an owned, runnable query so a
//! UI-layer data-fetching abstraction can cache the result under that key.
//! This crate owns no caching, retry, or staleness policy — it only produces
//! a value or a rejection carrying a `{message}` payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use contentful_graphql::hooks::PortfolioQuery;
//! use contentful_graphql::QueryOptions;
//!
//! let query = PortfolioQuery::new(&client, QueryOptions::default());
//!
//! // The caching layer stores the result under this key.
//! cache.register(PortfolioQuery::CACHE_KEY, || query.run());
//! ```

use std::fmt;

use crate::client::{ContentfulClient, GraphqlError, QueryName, QueryOptions};
use crate::content::PortfolioContent;

/// The rejection payload handed to the query-caching layer.
///
/// Carries only a human-readable message, matching the `{message: string}`
/// contract the external layer expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryError {
    /// Description of the failure.
    pub message: String,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for QueryError {}

impl From<GraphqlError> for QueryError {
    fn from(error: GraphqlError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// A runnable, cache-keyed portfolio query.
///
/// Owns a clone of the client and the options it will run with, so the
/// external caching layer can hold and re-run it without further wiring.
/// Every `run` call issues a fresh network request; deduplication of
/// concurrent runs is the caching layer's business.
#[derive(Clone, Debug)]
pub struct PortfolioQuery {
    client: ContentfulClient,
    options: QueryOptions,
}

impl PortfolioQuery {
    /// The cache key the external layer stores this query's result under.
    pub const CACHE_KEY: &'static str = QueryName::Portfolio.cache_key();

    /// Creates a query bound to the given client and options.
    #[must_use]
    pub fn new(client: &ContentfulClient, options: QueryOptions) -> Self {
        Self {
            client: client.clone(),
            options,
        }
    }

    /// Runs the query once.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] wrapping the message of the underlying
    /// [`GraphqlError`].
    pub async fn run(&self) -> Result<PortfolioContent, QueryError> {
        Ok(self.client.get_portfolio(&self.options).await?)
    }
}
