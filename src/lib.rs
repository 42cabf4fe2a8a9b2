//! # County Atlas
//!
//! Kenyan county reference data and indicator statistics, fetched from a
//! remote API and shaped for a searchable table and a ranked bar chart.
//!
//! ## Modules
//!
//! - [`model`]: wire types and the canonical `{name, value}` point
//! - [`normalize`]: tolerant conversion of one raw indicator row
//! - [`series`]: normalize, rank and truncate a whole response
//! - [`store`]: the loadable slice state machine and async stores
//! - [`view`]: table, chart and number formatting view models
//! - [`dashboard`]: the loading/error/ready decision
//!
//! With the default `native` feature the crate also provides the HTTP
//! [`client`], [`config`] loading and the `county-atlas` terminal binary.
//! Without it the crate has no I/O and builds for `wasm32`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use county_atlas::{ApiClient, Config, Dashboard, Presentation};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let client = Arc::new(ApiClient::new(&config.api)?);
//!
//!     let dashboard = Dashboard::new(client, &config.indicator);
//!     dashboard.load_all().await;
//!
//!     let snapshot = dashboard.snapshot();
//!     if let Presentation::Ready = snapshot.presentation() {
//!         for bar in snapshot.chart().bars {
//!             println!("{} {}", bar.name, bar.label);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod model;
pub mod normalize;
pub mod series;
pub mod store;
pub mod view;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

pub use dashboard::{present, DashboardSnapshot, Presentation, SliceStatus};
pub use model::{County, Envelope, Indicator, IndicatorMeta, IndicatorPoint, RawRecord, RawValue};
pub use normalize::{normalize, NormalizedRecord};
pub use series::{build_series, build_series_default, rank_points, DEFAULT_TOP_N};
pub use store::{LoadError, LoadErrorKind, LoadToken, LoadableSlice};
pub use view::{ChartModel, TableModel};

#[cfg(feature = "native")]
pub use client::{ApiClient, ApiError};
#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, IndicatorConfig, LoggingConfig};
#[cfg(feature = "native")]
pub use dashboard::Dashboard;
#[cfg(feature = "native")]
pub use store::{CountiesSource, IndicatorSource, RemoteStore, Source};
