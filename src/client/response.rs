//! GraphQL response type.
//!
//! This module provides the [`GraphqlResponse`] type for accessing the raw
//! response of a query execution, including GraphQL-level errors the client
//! does not inspect on the caller's behalf.

use serde_json::Value;

/// A parsed response from the GraphQL endpoint.
///
/// The body is kept as raw JSON; the client performs no status-code gating
/// and no inspection of the `errors` array. A non-2xx response with a valid
/// JSON body is represented the same way as a success and is the caller's
/// responsibility to handle.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::client::GraphqlResponse;
/// use serde_json::json;
///
/// let response = GraphqlResponse::new(
///     200,
///     json!({ "data": { "portfolioCollection": { "items": [] } } }),
/// );
///
/// assert!(response.is_ok());
/// assert!(response.errors().is_none());
/// assert!(response.data().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphqlResponse {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The full JSON body, typically `{data, errors, extensions}`.
    pub body: Value,
}

impl GraphqlResponse {
    /// Creates a new response from a status code and parsed body.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` if the HTTP status is in the 2xx range.
    ///
    /// Note that an OK status does not imply an error-free result; GraphQL
    /// errors can accompany a 200. Check [`errors`](Self::errors) as well.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the `data` field of the body, if present and non-null.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data").filter(|v| !v.is_null())
    }

    /// Returns the GraphQL `errors` array, if the body carries one.
    #[must_use]
    pub fn errors(&self) -> Option<&Value> {
        self.body.get("errors").filter(|v| !v.is_null())
    }

    /// Consumes the response and returns the `data` field, or `Value::Null`
    /// when the body has none.
    #[must_use]
    pub fn into_data(mut self) -> Value {
        self.body
            .as_object_mut()
            .and_then(|body| body.remove("data"))
            .unwrap_or(Value::Null)
    }
}
