//! The public Contentful GraphQL client.
//!
//! This module provides the [`ContentfulClient`] type for executing the
//! crate's fixed set of GraphQL queries against one Contentful space.
//!
//! # Example
//!
//! ```rust,ignore
//! use contentful_graphql::{
//!     AccessToken, ContentfulClient, ContentfulConfig, QueryOptions, SpaceId,
//! };
//!
//! let config = ContentfulConfig::builder()
//!     .space_id(SpaceId::new("cfexampleapi")?)
//!     .delivery_token(AccessToken::new("published-token")?)
//!     .preview_token(AccessToken::new("preview-token")?)
//!     .build()?;
//!
//! let client = ContentfulClient::new(config);
//!
//! // Published portfolio content from the master environment
//! let content = client.get_portfolio(&QueryOptions::default()).await?;
//! for item in &content.portfolios {
//!     println!("{}: {}", item.name, item.url);
//! }
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::errors::GraphqlError;
use crate::client::http::GraphqlHttpClient;
use crate::client::options::QueryOptions;
use crate::client::queries::QueryName;
use crate::client::response::GraphqlResponse;
use crate::client::token::ContentToken;
use crate::config::ContentfulConfig;
use crate::content::{PortfolioContent, PortfolioData, TopicData, TopicItem};

/// Client for the Contentful GraphQL Content API.
///
/// Each query issues exactly one HTTP POST; there is no retry, no request
/// caching, and no deduplication — two identical calls produce two
/// independent network requests. Result caching is the responsibility of an
/// external query-caching layer (see [`hooks`](crate::hooks)).
///
/// # Token Selection
///
/// Every call selects a bearer token from the configuration based on
/// [`QueryOptions::preview`]: the preview token when `true`, the delivery
/// (published) token otherwise.
///
/// # Thread Safety
///
/// `ContentfulClient` is `Clone`, `Send`, and `Sync`; clones share the
/// underlying connection pool and are safe to spread across async tasks.
#[derive(Clone, Debug)]
pub struct ContentfulClient {
    /// The internal HTTP client for making requests.
    http_client: GraphqlHttpClient,
    /// The space configuration, immutable after construction.
    config: ContentfulConfig,
}

// Verify ContentfulClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentfulClient>();
};

impl ContentfulClient {
    /// Creates a new client from the given configuration.
    ///
    /// Infallible: all credential validation already happened when the
    /// configuration was built, so a client cannot exist in an
    /// uninitialized state.
    #[must_use]
    pub fn new(config: ContentfulConfig) -> Self {
        let http_client = GraphqlHttpClient::new(&config);
        Self {
            http_client,
            config,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ContentfulConfig {
        &self.config
    }

    /// Executes a named query and returns the raw response.
    ///
    /// This is the low-level entry point: the full JSON body and HTTP status
    /// are returned so callers can inspect GraphQL-level `errors`, which the
    /// client never treats as failures. Most callers want [`get`](Self::get)
    /// or one of the typed accessors instead.
    ///
    /// The request body is `{query, variables: {preview}}` where `query` is
    /// the variant's static document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Network`] if the request cannot be completed,
    /// or [`GraphqlError::MalformedResponse`] if the body is not valid JSON.
    /// A non-2xx status with a JSON body is NOT an error.
    pub async fn execute(
        &self,
        query: QueryName,
        options: &QueryOptions,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let token = self.select_token(options.preview);
        let body = serde_json::json!({
            "query": query.document(),
            "variables": { "preview": options.preview }
        });

        self.http_client
            .post(options.environment, &token, &body)
            .await
    }

    /// Executes a named query and returns its `data` payload.
    ///
    /// The payload is `Value::Null` when the response carries no `data`
    /// field, which is what a rejected (non-2xx) JSON response looks like.
    ///
    /// If `options.delay` is set, delivery of the result is deferred by that
    /// duration *after* the response completes; the request itself is
    /// dispatched immediately.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn get(
        &self,
        query: QueryName,
        options: &QueryOptions,
    ) -> Result<Value, GraphqlError> {
        let response = self.execute(query, options).await?;
        let data = response.into_data();

        // Delay delivery, not dispatch
        if let Some(delay) = options.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(data)
    }

    /// Fetches the topic product collection as typed items.
    ///
    /// Items come back in server response order with `sys.id` and
    /// `featuredImage.url` flattened; nothing else is renamed or reordered.
    ///
    /// # Errors
    ///
    /// In addition to the [`get`](Self::get) errors, returns
    /// [`GraphqlError::Decode`] when the `data` payload does not match the
    /// documented topic collection shape (for example when the response was
    /// a GraphQL error body with no `data`).
    pub async fn get_topic_product_collection(
        &self,
        options: &QueryOptions,
    ) -> Result<Vec<TopicItem>, GraphqlError> {
        let data = self.get(QueryName::TopicProductCollection, options).await?;
        let data: TopicData = decode(QueryName::TopicProductCollection, data)?;

        Ok(data
            .topic_product_collection
            .items
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Fetches the portfolio entries and category list, reshaped into
    /// [`PortfolioContent`].
    ///
    /// `portfolios` mirrors `portfolioCollection.items` and
    /// `portfolio_categories` mirrors `portfolioCategoryCollection.items`,
    /// both verbatim and in server response order.
    ///
    /// # Errors
    ///
    /// Same as [`get_topic_product_collection`](Self::get_topic_product_collection),
    /// with [`GraphqlError::Decode`] reported against the portfolio shape.
    pub async fn get_portfolio(
        &self,
        options: &QueryOptions,
    ) -> Result<PortfolioContent, GraphqlError> {
        let data = self.get(QueryName::Portfolio, options).await?;
        let data: PortfolioData = decode(QueryName::Portfolio, data)?;

        Ok(data.into())
    }

    /// Selects the bearer token for a call.
    fn select_token(&self, preview: bool) -> ContentToken {
        if preview {
            ContentToken::Preview(self.config.preview_token().as_ref().to_string())
        } else {
            ContentToken::Published(self.config.delivery_token().as_ref().to_string())
        }
    }
}

/// Deserializes a `data` payload into a wire shape, tagging failures with
/// the query's cache key.
fn decode<T: DeserializeOwned>(query: QueryName, data: Value) -> Result<T, GraphqlError> {
    serde_json::from_value(data).map_err(|source| GraphqlError::Decode {
        query: query.cache_key(),
        source,
    })
}
