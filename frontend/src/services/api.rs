use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{
    ApiError, BalanceSnapshot, ChartSeries, DashboardApi, TransactionDraft, TransactionResponse,
};

use crate::config::DashboardConfig;

/// API client for communicating with the backend server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Same-origin client; endpoint paths are used as-is
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApi for ApiClient {
    async fn fetch_balance(&self) -> Result<BalanceSnapshot, ApiError> {
        self.get_json("/api/balance").await
    }

    async fn fetch_chart_series(&self) -> Result<ChartSeries, ApiError> {
        self.get_json("/api/transactions/chart_data").await
    }

    /// The body is read whatever the status: rejections come back as
    /// `{"success": false}` on 4xx responses.
    async fn add_transaction(&self, draft: &TransactionDraft) -> Result<TransactionResponse, ApiError> {
        let response = Request::post(&self.url("/add_transaction"))
            .json(draft)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match serde_json::from_str::<TransactionResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !ok => Err(ApiError::Status(status)),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_is_same_origin() {
        let client = ApiClient::new();
        assert_eq!(client.url("/api/balance"), "/api/balance");
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::with_base_url("http://localhost:5000/".to_string());
        assert_eq!(client.url("/add_transaction"), "http://localhost:5000/add_transaction");
    }

    #[test]
    fn test_client_from_config() {
        let config = DashboardConfig {
            api_base_url: "https://finance.example".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(
            ApiClient::from_config(&config).url("/api/transactions/chart_data"),
            "https://finance.example/api/transactions/chart_data"
        );
    }
}
