//! TheCocktailDB API type definitions

use serde::Deserialize;
use serde_json::{Map, Value};

use super::INGREDIENT_SLOTS;

/// Common response wrapper. `drinks` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub struct DrinksEnvelope<T> {
    pub drinks: Option<Vec<T>>,
}

/// Entry of `filter.php`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CocktailDbListDrink {
    pub id_drink: String,
    pub str_drink: String,
    #[serde(default)]
    pub str_drink_thumb: Option<String>,
}

/// Entry of `lookup.php`
///
/// The ingredient and measure slots (`strIngredient1`..`strIngredient15`)
/// land in `rest` and are read by [`CocktailDbDrink::ingredients`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CocktailDbDrink {
    pub id_drink: String,
    pub str_drink: String,
    #[serde(default)]
    pub str_drink_thumb: Option<String>,
    #[serde(default)]
    pub str_instructions: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl CocktailDbDrink {
    /// Ingredient names in slot order; null, missing and blank slots are skipped.
    pub fn ingredients(&self) -> Vec<String> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                self.rest
                    .get(&format!("strIngredient{slot}"))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            })
            .collect()
    }
}
