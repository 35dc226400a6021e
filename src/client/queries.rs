//! The closed set of GraphQL documents this client can execute.
//!
//! The client deliberately does not accept arbitrary query strings. The two
//! supported operations are fixed at build time as an enum with one static
//! GraphQL document per variant, so an unsupported query name is a compile
//! error rather than a runtime lookup failure.

/// GraphQL document for the topic product collection query.
const TOPIC_PRODUCT_COLLECTION_DOCUMENT: &str = r"
    query topicProductCollection($preview: Boolean) {
      topicProductCollection(preview: $preview) {
        items {
          sys { id }
          name
          featuredImage { url }
        }
      }
    }
";

/// GraphQL document for the portfolio query.
///
/// Requests the portfolio entries and the full category list in a single
/// round trip.
const PORTFOLIO_DOCUMENT: &str = r"
    query portfolios($preview: Boolean) {
      portfolioCollection(preview: $preview) {
        items {
          sys { id }
          name
          description
          techs
          url
          previewImage { url }
          categoriesCollection {
            items { name }
          }
        }
      }
      portfolioCategoryCollection(preview: $preview) {
        items {
          name
        }
      }
    }
";

/// A named query supported by the client.
///
/// Each variant carries its GraphQL document as an associated constant
/// string. The only runtime parameter any document accepts is the `$preview`
/// variable; everything else is fixed.
///
/// # Example
///
/// ```rust
/// use contentful_graphql::QueryName;
///
/// let query = QueryName::Portfolio;
/// assert!(query.document().contains("portfolioCollection"));
/// assert_eq!(query.cache_key(), "portfolio");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryName {
    /// The topic product collection query.
    TopicProductCollection,
    /// The portfolio + portfolio category query.
    Portfolio,
}

impl QueryName {
    /// Returns the static GraphQL document for this query.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::TopicProductCollection => TOPIC_PRODUCT_COLLECTION_DOCUMENT,
            Self::Portfolio => PORTFOLIO_DOCUMENT,
        }
    }

    /// Returns the cache key under which an external query-caching layer
    /// stores this query's result.
    #[must_use]
    pub const fn cache_key(self) -> &'static str {
        match self {
            Self::TopicProductCollection => "topicProductCollection",
            Self::Portfolio => "portfolio",
        }
    }
}
