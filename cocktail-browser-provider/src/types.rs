//! Provider-neutral catalog types.

use serde::{Deserialize, Serialize};

/// A drink as returned by a category listing.
///
/// Listings only carry identity and a thumbnail; everything else comes from
/// a detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkSummary {
    /// Provider-side drink identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Thumbnail image URL, when the listing includes one.
    pub thumbnail_url: Option<String>,
}

/// Full drink record from a detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkDetail {
    /// Provider-side drink identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Preparation instructions (empty when the provider has none).
    pub instructions: String,
    /// Image URL (empty when the provider has none).
    pub thumbnail_url: String,
    /// Ingredient names in slot order, blanks removed.
    pub ingredients: Vec<String>,
}

/// Connection settings used by [`create_provider`](crate::create_provider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// TheCocktailDB. `base_url` overrides the public v1 endpoint.
    CocktailDb {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
    },
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::CocktailDb { base_url: None }
    }
}
