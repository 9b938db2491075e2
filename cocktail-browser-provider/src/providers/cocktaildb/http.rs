//! TheCocktailDB HTTP request methods

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ProviderErrorMapper;

use super::{CocktailDbProvider, DrinksEnvelope};

impl CocktailDbProvider {
    /// Builds `{base}/{endpoint}?{param}={value}` with the value percent-encoded.
    pub(crate) fn endpoint_url(&self, endpoint: &str, param: &str, value: &str) -> String {
        format!(
            "{}/{endpoint}?{param}={}",
            self.base_url,
            urlencoding::encode(value)
        )
    }

    /// Executes a GET request and unwraps the `drinks` envelope.
    ///
    /// A `null` (or absent) `drinks` array becomes an empty list.
    pub(crate) async fn get_drinks<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let response_text =
            HttpUtils::execute_request(self.client.get(url), self.provider_name(), "GET", url)
                .await?;

        let envelope: DrinksEnvelope<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;
        Ok(envelope.drinks.unwrap_or_default())
    }
}
