//! Internal HTTP client for the Contentful GraphQL endpoint.
//!
//! This module issues the single POST request a query execution needs and
//! parses the body as JSON. There is no retry loop, no timeout, and no
//! status-code gate: a non-2xx response with a JSON body is returned to the
//! caller unchanged.

use std::collections::HashMap;

use serde_json::Value;

use crate::client::errors::GraphqlError;
use crate::client::response::GraphqlResponse;
use crate::client::token::ContentToken;
use crate::client::SDK_VERSION;
use crate::config::{ContentfulConfig, Environment, SpaceId};

/// Default base URI for the hosted GraphQL Content API.
const DEFAULT_BASE_URI: &str = "https://graphql.contentful.com";

/// Internal HTTP client for GraphQL requests.
///
/// This type is `pub(super)` and not exposed publicly.
#[derive(Clone, Debug)]
pub(super) struct GraphqlHttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://graphql.contentful.com`).
    base_uri: String,
    /// The space ID used in request paths.
    space_id: SpaceId,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify GraphqlHttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlHttpClient>();
};

impl GraphqlHttpClient {
    /// Creates a new GraphQL HTTP client from the configuration.
    #[must_use]
    pub(super) fn new(config: &ContentfulConfig) -> Self {
        // Use api_host if configured, otherwise the hosted endpoint
        let base_uri = config
            .api_host()
            .map_or_else(|| DEFAULT_BASE_URI.to_string(), |host| host.as_ref().to_string());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Contentful GraphQL Client v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            space_id: config.space_id().clone(),
            default_headers,
        }
    }

    /// POSTs a GraphQL request body and parses the response as JSON.
    ///
    /// The URL is `{base}/content/v1/spaces/{space}/environments/{env}` and
    /// the token is sent as an `Authorization: Bearer` header. The body is
    /// parsed as JSON regardless of HTTP status; a non-2xx response only
    /// produces a `tracing` warning, never an error, so GraphQL error bodies
    /// reach the caller intact.
    pub(super) async fn post(
        &self,
        environment: Environment,
        token: &ContentToken,
        body: &Value,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let url = format!(
            "{}/content/v1/spaces/{}/environments/{}",
            self.base_uri, self.space_id, environment
        );

        tracing::debug!(url = %url, preview = token.is_preview(), "dispatching GraphQL request");

        let mut req_builder = self
            .client
            .post(&url)
            .header(token.header_name(), token.header_value())
            .header("Content-Type", "application/json");
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send().await?;

        let status = res.status().as_u16();
        let body_text = res.text().await?;
        let body: Value =
            serde_json::from_str(&body_text).map_err(GraphqlError::MalformedResponse)?;

        if !(200..=299).contains(&status) {
            tracing::warn!(
                status,
                "GraphQL endpoint returned a non-2xx status; body passed through unchanged"
            );
        }

        Ok(GraphqlResponse::new(status, body))
    }
}

#[cfg(test)]
impl GraphqlHttpClient {
    /// Returns the base URI for this client (test helper).
    fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client (test helper).
    fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}
