//! API access

mod client;

pub use client::{fetch_counties, fetch_indicator_data, get_api_base, set_api_base, DEFAULT_API_BASE};
