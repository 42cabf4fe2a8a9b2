//! Root Composer
//!
//! Decides what the dashboard shows from the state of its slices: anything
//! loading wins, then the first error in store order, then the data.

use crate::model::{County, IndicatorPoint};
use crate::store::{LoadError, LoadableSlice};
use crate::view::{ChartModel, TableModel};

/// The part of a slice the composer looks at
pub trait SliceStatus {
    fn is_loading(&self) -> bool;
    fn error(&self) -> Option<&LoadError>;
}

impl<T> SliceStatus for LoadableSlice<T> {
    fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }
}

/// What the dashboard should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation<'a> {
    Loading,
    Error(&'a LoadError),
    Ready,
}

/// Pick the presentation for a set of slices, given in store order
pub fn present<'a>(slices: &[&'a dyn SliceStatus]) -> Presentation<'a> {
    if slices.iter().any(|s| s.is_loading()) {
        return Presentation::Loading;
    }

    match slices.iter().find_map(|s| s.error()) {
        Some(error) => Presentation::Error(error),
        None => Presentation::Ready,
    }
}

/// A consistent copy of both slices, taken after loading
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub counties: LoadableSlice<County>,
    pub population: LoadableSlice<IndicatorPoint>,
    pub title: String,
    pub top_n: usize,
}

impl DashboardSnapshot {
    pub fn presentation(&self) -> Presentation<'_> {
        present(&[&self.counties, &self.population])
    }

    pub fn table(&self, search: &str) -> TableModel {
        TableModel::build(&self.counties.items, search)
    }

    pub fn chart(&self) -> ChartModel {
        ChartModel::from_points(self.title.clone(), &self.population.items, self.top_n)
    }
}

#[cfg(feature = "native")]
pub use native::Dashboard;

#[cfg(feature = "native")]
mod native {
    use std::sync::Arc;

    use super::*;
    use crate::client::ApiClient;
    use crate::config::IndicatorConfig;
    use crate::model::chart_title;
    use crate::store::{CountiesSource, IndicatorSource, RemoteStore};

    /// Both dashboard stores, constructed together
    pub struct Dashboard {
        pub counties: RemoteStore<CountiesSource>,
        pub population: RemoteStore<IndicatorSource>,
    }

    impl Dashboard {
        pub fn new(client: Arc<ApiClient>, indicator: &IndicatorConfig) -> Self {
            Self {
                counties: RemoteStore::new(CountiesSource::new(Arc::clone(&client))),
                population: RemoteStore::new(IndicatorSource::from_config(client, indicator)),
            }
        }

        /// Load both stores concurrently; they settle independently
        pub async fn load_all(&self) {
            futures_util::future::join(self.counties.load(), self.population.load()).await;
        }

        pub fn snapshot(&self) -> DashboardSnapshot {
            let source = self.population.source();
            DashboardSnapshot {
                counties: self.counties.snapshot(),
                population: self.population.snapshot(),
                title: chart_title(source.indicator(), source.year()),
                top_n: source.top_n(),
            }
        }
    }
}
