//! TheCocktailDB `CatalogProvider` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{CatalogProvider, ProviderErrorMapper};
use crate::types::{DrinkDetail, DrinkSummary};

use super::{CocktailDbDrink, CocktailDbListDrink, CocktailDbProvider};

impl ProviderErrorMapper for CocktailDbProvider {
    fn provider_name(&self) -> &'static str {
        "cocktaildb"
    }
}

impl CocktailDbProvider {
    pub(crate) fn list_drink_to_summary(drink: CocktailDbListDrink) -> DrinkSummary {
        DrinkSummary {
            id: drink.id_drink,
            name: drink.str_drink,
            thumbnail_url: drink.str_drink_thumb.filter(|url| !url.is_empty()),
        }
    }

    pub(crate) fn drink_to_detail(drink: CocktailDbDrink) -> DrinkDetail {
        let ingredients = drink.ingredients();
        DrinkDetail {
            id: drink.id_drink,
            name: drink.str_drink,
            instructions: drink.str_instructions.unwrap_or_default(),
            thumbnail_url: drink.str_drink_thumb.unwrap_or_default(),
            ingredients,
        }
    }
}

#[async_trait]
impl CatalogProvider for CocktailDbProvider {
    fn id(&self) -> &'static str {
        "cocktaildb"
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<DrinkSummary>> {
        if category.trim().is_empty() {
            return Err(self.invalid_parameter("category", "must not be empty"));
        }

        let url = self.endpoint_url("filter.php", "c", category);
        let drinks: Vec<CocktailDbListDrink> = self.get_drinks(&url).await?;
        log::debug!(
            "[{}] {} drinks in category '{category}'",
            self.provider_name(),
            drinks.len()
        );

        Ok(drinks
            .into_iter()
            .map(Self::list_drink_to_summary)
            .collect())
    }

    async fn lookup(&self, drink_id: &str) -> Result<Option<DrinkDetail>> {
        if drink_id.trim().is_empty() {
            return Err(self.invalid_parameter("drink_id", "must not be empty"));
        }

        let url = self.endpoint_url("lookup.php", "i", drink_id);
        let drinks: Vec<CocktailDbDrink> = self.get_drinks(&url).await?;

        let Some(drink) = drinks.into_iter().next() else {
            log::debug!("[{}] No record for drink {drink_id}", self.provider_name());
            return Ok(None);
        };

        Ok(Some(Self::drink_to_detail(drink)))
    }
}
