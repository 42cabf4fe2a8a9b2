//! County API Client
//!
//! HTTP client for the county statistics REST API.
//!
//! ## Endpoints
//!
//! - `GET /counties` - all counties, `{"data": [County]}`
//! - `GET /counties/{id}` - one county, `{"data": County}`
//! - `GET /indicators` - available indicators
//! - `GET /data?indicator=..&year=..` - raw indicator rows plus `meta`
//!
//! Paths are relative to [`ApiConfig::base_url`], which carries the
//! `/api/v1` prefix.

mod error;

pub use error::ApiError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::model::{County, Envelope, Indicator, ItemEnvelope, RawRecord};

/// County API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all counties
    pub async fn fetch_counties(&self) -> Result<Vec<County>, ApiError> {
        let envelope: Envelope<County> = self.get_json("/counties").await?;
        Ok(envelope.data)
    }

    /// Fetch a single county by id
    pub async fn fetch_county(&self, id: i64) -> Result<County, ApiError> {
        let envelope: ItemEnvelope<County> = self.get_json(&format!("/counties/{}", id)).await?;
        Ok(envelope.data)
    }

    /// Fetch the list of indicators
    pub async fn fetch_indicators(&self) -> Result<Vec<Indicator>, ApiError> {
        let envelope: Envelope<Indicator> = self.get_json("/indicators").await?;
        Ok(envelope.data)
    }

    /// Fetch raw rows for one indicator and year
    pub async fn fetch_indicator_data(
        &self,
        indicator: &str,
        year: i32,
    ) -> Result<Envelope<RawRecord>, ApiError> {
        let path = format!(
            "/data?indicator={}&year={}",
            urlencoding::encode(indicator),
            year
        );
        self.get_json(&path).await
    }

    /// GET a path and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "API response");

        let body = response.text().await.map_err(ApiError::from_transport)?;

        if !status.is_success() {
            let message = match body.trim() {
                "" => status.canonical_reason().unwrap_or("Unknown error").to_string(),
                text => text.to_string(),
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
