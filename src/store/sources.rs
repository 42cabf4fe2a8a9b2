//! Concrete sources for the dashboard stores

use async_trait::async_trait;
use std::sync::Arc;

use super::error::{LoadError, COUNTIES_FALLBACK, STATS_FALLBACK};
use super::remote::Source;
use crate::client::ApiClient;
use crate::config::IndicatorConfig;
use crate::model::{County, IndicatorPoint};
use crate::series::build_series;

/// All counties, passed through as the API returns them
pub struct CountiesSource {
    client: Arc<ApiClient>,
}

impl CountiesSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for CountiesSource {
    type Item = County;

    fn label(&self) -> &str {
        "counties"
    }

    fn fallback_message(&self) -> &str {
        COUNTIES_FALLBACK
    }

    async fn fetch(&self) -> Result<Vec<County>, LoadError> {
        Ok(self.client.fetch_counties().await?)
    }
}

/// One indicator for one year, normalized and ranked
pub struct IndicatorSource {
    client: Arc<ApiClient>,
    indicator: String,
    year: i32,
    top_n: usize,
}

impl IndicatorSource {
    pub fn new(client: Arc<ApiClient>, indicator: impl Into<String>, year: i32, top_n: usize) -> Self {
        Self {
            client,
            indicator: indicator.into(),
            year,
            top_n,
        }
    }

    pub fn from_config(client: Arc<ApiClient>, config: &IndicatorConfig) -> Self {
        Self::new(client, config.code.clone(), config.year, config.top_n)
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

#[async_trait]
impl Source for IndicatorSource {
    type Item = IndicatorPoint;

    fn label(&self) -> &str {
        "indicator"
    }

    fn fallback_message(&self) -> &str {
        STATS_FALLBACK
    }

    async fn fetch(&self) -> Result<Vec<IndicatorPoint>, LoadError> {
        let envelope = self
            .client
            .fetch_indicator_data(&self.indicator, self.year)
            .await?;

        if let Some(meta) = &envelope.meta {
            if meta.indicator != self.indicator || meta.year != self.year {
                tracing::warn!(
                    requested_indicator = %self.indicator,
                    requested_year = self.year,
                    indicator = %meta.indicator,
                    year = meta.year,
                    "Indicator data answered a different query"
                );
            }
        }

        let series = build_series(&envelope.data, self.top_n);
        tracing::debug!(
            indicator = %self.indicator,
            raw = envelope.data.len(),
            points = series.len(),
            "Built indicator series"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{fixture_router, spawn_api};
    use crate::config::ApiConfig;
    use crate::store::{LoadErrorKind, RemoteStore};
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    async fn client_for(router: Router) -> Arc<ApiClient> {
        let base = spawn_api(router).await;
        Arc::new(ApiClient::new(&ApiConfig::new(base)).unwrap())
    }

    #[tokio::test]
    async fn test_counties_store_loads() {
        let client = client_for(fixture_router()).await;
        let store = RemoteStore::new(CountiesSource::new(client));

        assert!(store.load().await);

        let slice = store.snapshot();
        assert!(!slice.is_loading);
        assert!(slice.error.is_none());
        assert_eq!(slice.items.len(), 2);
        assert_eq!(slice.items[0].name, "Mombasa");
        assert_eq!(slice.items[0].area_sq_km, Some(212.5));
    }

    #[tokio::test]
    async fn test_counties_passed_through_verbatim() {
        let router = Router::new().route(
            "/api/v1/counties",
            get(|| async {
                Json(json!({"data": [{"id": 1, "code": "047", "name": "Nairobi", "former_province": null}]}))
            }),
        );
        let client = client_for(router).await;
        let store = RemoteStore::new(CountiesSource::new(client));

        store.load().await;

        let slice = store.snapshot();
        assert!(!slice.is_loading);
        assert!(slice.error.is_none());
        assert_eq!(slice.items, vec![County::new(1, "047", "Nairobi")]);
    }

    #[tokio::test]
    async fn test_indicator_store_ranks_values() {
        let client = client_for(fixture_router()).await;
        let store = RemoteStore::new(IndicatorSource::new(client, "POP_TOTAL", 2019, 10));

        store.load().await;

        let slice = store.snapshot();
        assert_eq!(
            slice.items,
            vec![
                IndicatorPoint::new("Nairobi", 4397073.0),
                IndicatorPoint::new("Kiambu", 2417735.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_indicator_store_respects_top_n() {
        let client = client_for(fixture_router()).await;
        let store = RemoteStore::new(IndicatorSource::new(client, "POP_TOTAL", 2019, 1));

        store.load().await;
        assert_eq!(store.snapshot().items.len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_sets_error() {
        let router = Router::new().route(
            "/api/v1/counties",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch counties") }),
        );
        let client = client_for(router).await;
        let store = RemoteStore::new(CountiesSource::new(client));

        assert!(store.load().await);

        let slice = store.snapshot();
        assert!(!slice.is_loading);
        assert!(slice.items.is_empty());
        let error = slice.error.unwrap();
        assert_eq!(error.kind, LoadErrorKind::ServerFailure(500));
        assert!(error.message.contains("Failed to fetch counties"));
    }

    #[tokio::test]
    async fn test_unparseable_values_degrade() {
        let router = Router::new().route(
            "/api/v1/data",
            get(|| async {
                Json(json!({"data": [
                    {"county_name": "Lamu", "value": "n/a"},
                    {"value": 12},
                    {"county_name": "Kwale", "value": {"String": "866820", "Valid": true}}
                ]}))
            }),
        );
        let client = client_for(router).await;
        let store = RemoteStore::new(IndicatorSource::new(client, "POP_TOTAL", 2019, 10));

        store.load().await;

        let slice = store.snapshot();
        assert!(slice.error.is_none());
        assert_eq!(
            slice.items,
            vec![
                IndicatorPoint::new("Kwale", 866820.0),
                IndicatorPoint::new("Lamu", 0.0),
            ]
        );
    }
}
