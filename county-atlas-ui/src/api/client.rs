//! HTTP API Client
//!
//! Functions for communicating with the county REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use county_atlas::model::{County, Envelope, RawRecord};
use county_atlas::LoadError;

/// Default API base URL; relative so the dev server proxy forwards it
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Local storage key holding a user-chosen API base URL
const API_URL_KEY: &str = "county_atlas_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = local_storage().and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    resolve_base(stored.as_deref())
}

/// Set the API base URL in local storage; an empty URL restores the default
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = if url.trim().is_empty() {
            storage.remove_item(API_URL_KEY)
        } else {
            storage.set_item(API_URL_KEY, url.trim())
        };
    }
}

fn resolve_base(stored: Option<&str>) -> String {
    match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

// ============ API Functions ============

/// Fetch all counties
pub async fn fetch_counties() -> Result<Vec<County>, LoadError> {
    let envelope: Envelope<County> = get_json("/counties").await?;
    Ok(envelope.data)
}

/// Fetch raw rows for one indicator and year
pub async fn fetch_indicator_data(
    indicator: &str,
    year: i32,
) -> Result<Envelope<RawRecord>, LoadError> {
    get_json(&data_path(indicator, year)).await
}

fn data_path(indicator: &str, year: i32) -> String {
    let indicator = String::from(js_sys::encode_uri_component(indicator));
    format!("/data?indicator={}&year={}", indicator, year)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let url = format!("{}{}", get_api_base(), path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::network(format!("Network error: {}", e)))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(response.status(), &response.status_text(), &body));
    }

    response
        .json()
        .await
        .map_err(|e| LoadError::decode(format!("Parse error: {}", e)))
}

/// Error for a non-2xx response. The body wins over the status text; when
/// both are blank the message stays empty so the store's fallback applies.
fn status_error(status: u16, status_text: &str, body: &str) -> LoadError {
    let reason = match body.trim() {
        "" => status_text.trim(),
        text => text,
    };

    if reason.is_empty() {
        LoadError::server(status, "")
    } else {
        LoadError::server(status, format!("Server returned {}: {}", status, reason))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_round_trip() {
        set_api_base("http://stats.example/api/v1/");
        assert_eq!(get_api_base(), "http://stats.example/api/v1");

        set_api_base("");
        assert_eq!(get_api_base(), DEFAULT_API_BASE);
    }

    #[wasm_bindgen_test]
    fn test_data_path_encodes_indicator() {
        assert_eq!(data_path("POP TOTAL", 2019), "/data?indicator=POP%20TOTAL&year=2019");
    }
}
