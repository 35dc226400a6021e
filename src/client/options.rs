//! Per-query options for the Contentful GraphQL client.

use crate::config::Environment;
use std::time::Duration;

/// Options applied to a single query execution.
///
/// All fields have defaults matching the common case: published content from
/// the `master` environment, delivered as soon as the response arrives.
///
/// # Delivery Delay
///
/// `delay` defers *delivery* of the result, not dispatch of the request: the
/// HTTP request is sent immediately, and the configured duration is waited
/// out after the response completes. This exists so UI callers can exercise
/// loading states against real responses.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::{Environment, QueryOptions};
/// use std::time::Duration;
///
/// let options = QueryOptions::new()
///     .preview(true)
///     .environment(Environment::Dev)
///     .delay(Duration::from_millis(250));
///
/// assert!(options.preview);
/// assert_eq!(options.environment, Environment::Dev);
///
/// // Defaults: published content, master environment, no delay
/// let defaults = QueryOptions::default();
/// assert!(!defaults.preview);
/// assert_eq!(defaults.environment, Environment::Master);
/// assert!(defaults.delay.is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// When `true`, the preview token is sent and draft content is served.
    pub preview: bool,
    /// The environment the query targets.
    pub environment: Environment,
    /// Optional artificial delay applied after the response completes.
    pub delay: Option<Duration>,
}

impl QueryOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to request preview (draft) content.
    #[must_use]
    pub const fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Sets the target environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets an artificial delivery delay.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}
