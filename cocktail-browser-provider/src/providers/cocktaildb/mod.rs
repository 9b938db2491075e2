//! TheCocktailDB provider

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_base_url};

pub(crate) use types::{CocktailDbDrink, CocktailDbListDrink, DrinksEnvelope};

/// Public v1 endpoint (free test key `1`).
pub const COCKTAILDB_API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Number of positional ingredient slots in a lookup record.
pub(crate) const INGREDIENT_SLOTS: usize = 15;

/// TheCocktailDB catalog provider
pub struct CocktailDbProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl CocktailDbProvider {
    /// Creates a provider against the public endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(COCKTAILDB_API_BASE)
    }

    /// Creates a provider against another deployment of the same API.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: create_http_client("cocktaildb")?,
            base_url: normalize_base_url(base_url),
        })
    }
}
