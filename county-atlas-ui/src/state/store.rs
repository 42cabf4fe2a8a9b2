//! Reactive Stores
//!
//! A [`UiStore`] wraps one [`LoadableSlice`] in a signal. Loads run with
//! `spawn_local` and settle through the slice's token guard, so a slow
//! response never overwrites a newer one.
//!
//! Stores are created by [`provide_stores`] at the app root and reached
//! through context; nothing lives in module-level globals.

use chrono::{DateTime, Utc};
use leptos::*;
use std::future::Future;

use county_atlas::model::{chart_title, County, IndicatorPoint, POPULATION_INDICATOR, POPULATION_YEAR};
use county_atlas::store::{COUNTIES_FALLBACK, STATS_FALLBACK};
use county_atlas::{build_series, LoadError, LoadToken, LoadableSlice, DEFAULT_TOP_N};

use crate::api;

/// One loadable slice held in a signal
pub struct UiStore<T: 'static> {
    slice: RwSignal<LoadableSlice<T>>,
}

impl<T: 'static> Clone for UiStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UiStore<T> {}

impl<T: Clone + 'static> UiStore<T> {
    pub fn new() -> Self {
        Self {
            slice: create_rw_signal(LoadableSlice::default()),
        }
    }

    /// Read-only view for components
    pub fn slice(&self) -> ReadSignal<LoadableSlice<T>> {
        self.slice.read_only()
    }

    pub fn is_loading(&self) -> bool {
        self.slice.with(|s| s.is_loading)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.slice.with(|s| s.loaded_at)
    }

    /// Run `fetch` and publish its result into the slice
    pub fn load<F>(&self, label: &'static str, fallback: &'static str, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, LoadError>> + 'static,
    {
        let slice = self.slice;
        let mut token = LoadToken::default();
        slice.update(|s| token = s.begin());

        spawn_local(async move {
            let outcome = fetch.await.map_err(|e| e.or_fallback(fallback));

            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Failed to load {}: {}", label, e).into());
            }

            slice.update(|s| {
                if !s.finish(token, outcome) {
                    web_sys::console::debug_1(
                        &format!("Discarded stale {} response #{}", label, token.get()).into(),
                    );
                }
            });
        });
    }
}

impl<T: Clone + 'static> Default for UiStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET /counties`, passed through
#[derive(Clone, Copy)]
pub struct CountyStore {
    pub store: UiStore<County>,
}

impl CountyStore {
    pub fn load(&self) {
        self.store
            .load("counties", COUNTIES_FALLBACK, api::fetch_counties());
    }
}

/// Population for the census year, ranked for the chart
#[derive(Clone, Copy)]
pub struct StatsStore {
    pub store: UiStore<IndicatorPoint>,
    pub indicator: &'static str,
    pub year: i32,
    pub top_n: usize,
}

impl StatsStore {
    pub fn title(&self) -> String {
        chart_title(self.indicator, self.year)
    }

    pub fn load(&self) {
        let (indicator, year, top_n) = (self.indicator, self.year, self.top_n);

        self.store.load("population stats", STATS_FALLBACK, async move {
            let envelope = api::fetch_indicator_data(indicator, year).await?;

            if let Some(meta) = &envelope.meta {
                if meta.indicator != indicator || meta.year != year {
                    web_sys::console::warn_1(
                        &format!(
                            "Requested {} {}, server answered {} {}",
                            indicator, year, meta.indicator, meta.year
                        )
                        .into(),
                    );
                }
            }

            Ok(build_series(&envelope.data, top_n))
        });
    }
}

/// Create both stores and provide them to the component tree
pub fn provide_stores() -> (CountyStore, StatsStore) {
    let counties = CountyStore {
        store: UiStore::new(),
    };
    let stats = StatsStore {
        store: UiStore::new(),
        indicator: POPULATION_INDICATOR,
        year: POPULATION_YEAR,
        top_n: DEFAULT_TOP_N,
    };

    provide_context(counties);
    provide_context(stats);

    (counties, stats)
}
