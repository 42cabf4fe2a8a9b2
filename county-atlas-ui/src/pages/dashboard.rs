//! Dashboard Page
//!
//! Shows the loading view while either store loads, the first error in store
//! order (counties, then population) if any failed, and otherwise the table
//! and the chart.

use leptos::*;

use county_atlas::{present, Presentation};

use crate::components::{CountyTable, ErrorPanel, Loading, PopulationChart};
use crate::state::{CountyStore, StatsStore};

#[derive(Clone, PartialEq)]
enum Screen {
    Loading,
    Error(county_atlas::LoadError),
    Ready,
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let counties = use_context::<CountyStore>().expect("CountyStore not found");
    let stats = use_context::<StatsStore>().expect("StatsStore not found");

    let county_slice = counties.store.slice();
    let stats_slice = stats.store.slice();

    let screen = create_memo(move |_| {
        county_slice.with(|c| {
            stats_slice.with(|s| match present(&[c, s]) {
                Presentation::Loading => Screen::Loading,
                Presentation::Error(e) => Screen::Error(e.clone()),
                Presentation::Ready => Screen::Ready,
            })
        })
    });

    let reload = move |_: ()| {
        counties.load();
        stats.load();
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Kenya Counties"</h1>
                <p class="text-gray-400 mt-1">"Reference data and population by county"</p>
            </div>

            {move || match screen.get() {
                Screen::Loading => view! { <Loading /> }.into_view(),
                Screen::Error(error) => view! { <ErrorPanel error=error on_reload=reload /> }.into_view(),
                Screen::Ready => view! {
                    <div class="grid lg:grid-cols-2 gap-8">
                        <CountyTable />
                        <PopulationChart />
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
