//! Catalog entries

use cocktail_browser_provider::{DrinkDetail, DrinkSummary};
use serde::{Deserialize, Serialize};

/// Detail fields filled in by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedDetails {
    pub instructions: String,
    pub thumbnail_url: String,
    /// Ingredient names in slot order, blanks removed.
    pub ingredients: Vec<String>,
}

impl From<DrinkDetail> for EnrichedDetails {
    fn from(detail: DrinkDetail) -> Self {
        Self {
            instructions: detail.instructions,
            thumbnail_url: detail.thumbnail_url,
            ingredients: detail.ingredients,
        }
    }
}

/// One drink of a fetched list.
///
/// `details` stays `None` when the lookup found nothing or failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub details: Option<EnrichedDetails>,
}

impl CatalogItem {
    /// Image URL, preferring the detail record over the listing thumbnail.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.details
            .as_ref()
            .map(|d| d.thumbnail_url.as_str())
            .filter(|url| !url.is_empty())
            .or(self.thumbnail_url.as_deref())
    }
}

impl From<DrinkSummary> for CatalogItem {
    fn from(summary: DrinkSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            thumbnail_url: summary.thumbnail_url,
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DrinkSummary {
        DrinkSummary {
            id: "17222".into(),
            name: "A1".into(),
            thumbnail_url: Some("https://example.test/list.jpg".into()),
        }
    }

    #[test]
    fn from_summary_has_no_details() {
        let item = CatalogItem::from(summary());
        assert_eq!(item.id, "17222");
        assert_eq!(item.name, "A1");
        assert!(item.details.is_none());
        assert_eq!(item.image_url(), Some("https://example.test/list.jpg"));
    }

    #[test]
    fn image_url_prefers_detail_record() {
        let mut item = CatalogItem::from(summary());
        item.details = Some(EnrichedDetails {
            instructions: "Shake.".into(),
            thumbnail_url: "https://example.test/detail.jpg".into(),
            ingredients: vec!["Gin".into()],
        });
        assert_eq!(item.image_url(), Some("https://example.test/detail.jpg"));
    }

    #[test]
    fn deserializes_item_without_details_field() {
        let item: CatalogItem = serde_json::from_str(r#"{"id":"1","name":"Plain"}"#).unwrap();
        assert!(item.details.is_none());
        assert!(item.thumbnail_url.is_none());
    }
}
