use reqwest::Client;
use serde_json::Value;

use super::{MarketDataError, Operation};

/// Thin client for the Alpha Vantage query endpoint.
///
/// Every operation maps onto a single GET against the same base URL, selected
/// by the `function` parameter and authenticated with the `apikey` parameter.
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AlphaVantageClient {
    pub fn new(client: Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        AlphaVantageClient {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Perform the upstream call for one operation and return the raw JSON body.
    pub async fn execute(&self, operation: &Operation) -> Result<Value, MarketDataError> {
        self.fetch_data(operation.function_code(), operation.params())
            .await
    }

    async fn fetch_data(
        &self,
        function: &str,
        params: Vec<(&str, &str)>,
    ) -> Result<Value, MarketDataError> {
        let mut query_params = params;
        query_params.push(("function", function));
        query_params.push(("apikey", self.token.as_str()));

        let url = reqwest::Url::parse_with_params(&self.base_url, &query_params)
            .map_err(|e| MarketDataError::ProviderError(format!("Failed to build URL: {}", e)))?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MarketDataError::ProviderError(format!(
                "AlphaVantage API error: {}",
                error_body
            )));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| MarketDataError::ParsingError(format!("Invalid JSON from upstream: {}", e)))
    }
}
