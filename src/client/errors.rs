//! Error types for GraphQL query execution.
//!
//! # Error Handling
//!
//! Only transport- and decoding-level failures are surfaced as errors:
//!
//! - [`GraphqlError::Network`]: the request never completed (DNS, TLS,
//!   connection failures)
//! - [`GraphqlError::MalformedResponse`]: the response body was not valid JSON
//! - [`GraphqlError::Decode`]: a typed accessor received JSON that does not
//!   match the documented response shape
//!
//! GraphQL-level errors are deliberately *not* an error variant: the endpoint
//! reports them as a JSON body with an `errors` array (often alongside a
//! non-2xx status), and the client returns that body as-is. Callers that need
//! to distinguish them inspect [`GraphqlResponse::errors`](crate::client::GraphqlResponse::errors).
//!
//! # Example
//!
//! ```rust,ignore
//! use contentful_graphql::client::GraphqlError;
//!
//! match client.execute(QueryName::Portfolio, &options).await {
//!     Ok(response) => {
//!         if let Some(errors) = response.errors() {
//!             println!("GraphQL errors: {errors}");
//!         }
//!     }
//!     Err(GraphqlError::Network(e)) => println!("transport failure: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// Error type for GraphQL query execution.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request could not be completed at the transport level.
    ///
    /// Covers DNS resolution, TLS, and connection failures. No retry is
    /// attempted.
    #[error("network error reaching the GraphQL endpoint: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The `data` payload did not match the documented shape for a query.
    #[error("failed to decode '{query}' response: {source}")]
    Decode {
        /// The query whose response failed to decode.
        query: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}
