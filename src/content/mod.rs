//! Content types returned by the typed query accessors.
//!
//! Two families of types live here:
//!
//! - Public DTOs ([`TopicItem`], [`PortfolioItem`], [`PortfolioCategory`],
//!   [`PortfolioContent`]): flat, caller-facing shapes with the Contentful
//!   `sys`/`featuredImage` nesting folded away.
//! - Crate-private wire shapes (`TopicData`, `PortfolioData`, ...): exact
//!   mirrors of the GraphQL response JSON, deserialized with serde and then
//!   converted. Item order is preserved from the server response throughout;
//!   the upstream API makes no ordering promise, so neither does this crate.

use serde::{Deserialize, Serialize};

/// One entry of the topic product collection.
///
/// Mirrors the fields the topic query requests, with `sys.id` and
/// `featuredImage.url` flattened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicItem {
    /// The entry's Contentful ID (`sys.id`).
    pub id: String,
    /// The topic name.
    pub name: String,
    /// URL of the featured image asset.
    pub featured_image_url: String,
}

/// A portfolio category, as returned by both the category collection and the
/// per-entry category list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PortfolioCategory {
    /// The category name.
    pub name: String,
}

/// One portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    /// The entry's Contentful ID (`sys.id`).
    pub id: String,
    /// The project name.
    pub name: String,
    /// The project description.
    pub description: String,
    /// Technologies used, in authoring order.
    pub technologies: Vec<String>,
    /// Link to the project.
    pub url: String,
    /// URL of the preview image asset, when one is set.
    pub preview_image_url: Option<String>,
    /// Categories assigned to this entry, in authoring order.
    pub categories: Vec<PortfolioCategory>,
}

/// The reshaped result of the portfolio query: entries plus the full
/// category list, both in server response order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PortfolioContent {
    /// All portfolio entries.
    pub portfolios: Vec<PortfolioItem>,
    /// All portfolio categories.
    pub portfolio_categories: Vec<PortfolioCategory>,
}

// ---------------------------------------------------------------------------
// Wire shapes: exact mirrors of the GraphQL response JSON.
// ---------------------------------------------------------------------------

/// The `sys` metadata block Contentful attaches to every entry.
#[derive(Debug, Deserialize)]
pub(crate) struct Sys {
    pub(crate) id: String,
}

/// An asset reference carrying only its URL.
#[derive(Debug, Deserialize)]
pub(crate) struct AssetUrl {
    pub(crate) url: String,
}

/// The `{items: [...]}` wrapper every collection field uses.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemList<T> {
    pub(crate) items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TopicEntry {
    pub(crate) sys: Sys,
    pub(crate) name: String,
    pub(crate) featured_image: AssetUrl,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TopicData {
    pub(crate) topic_product_collection: ItemList<TopicEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PortfolioEntry {
    pub(crate) sys: Sys,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) techs: Vec<String>,
    pub(crate) url: String,
    pub(crate) preview_image: Option<AssetUrl>,
    pub(crate) categories_collection: ItemList<PortfolioCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PortfolioData {
    pub(crate) portfolio_collection: ItemList<PortfolioEntry>,
    pub(crate) portfolio_category_collection: ItemList<PortfolioCategory>,
}

impl From<TopicEntry> for TopicItem {
    fn from(entry: TopicEntry) -> Self {
        Self {
            id: entry.sys.id,
            name: entry.name,
            featured_image_url: entry.featured_image.url,
        }
    }
}

impl From<PortfolioEntry> for PortfolioItem {
    fn from(entry: PortfolioEntry) -> Self {
        Self {
            id: entry.sys.id,
            name: entry.name,
            description: entry.description,
            technologies: entry.techs,
            url: entry.url,
            preview_image_url: entry.preview_image.map(|asset| asset.url),
            categories: entry.categories_collection.items,
        }
    }
}

impl From<PortfolioData> for PortfolioContent {
    fn from(data: PortfolioData) -> Self {
        Self {
            portfolios: data
                .portfolio_collection
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
            portfolio_categories: data.portfolio_category_collection.items,
        }
    }
}
