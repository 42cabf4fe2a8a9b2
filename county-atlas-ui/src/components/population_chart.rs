//! Population Chart
//!
//! Horizontal ranked bars drawn with plain elements. Hovering or focusing a
//! bar shows its exact formatted value.

use leptos::*;

use county_atlas::view::ChartModel;

use crate::state::StatsStore;

/// Axis ticks under the bars
const TICK_COUNT: usize = 5;

#[component]
pub fn PopulationChart() -> impl IntoView {
    let stats = use_context::<StatsStore>().expect("StatsStore not found");
    let slice = stats.store.slice();

    let chart = create_memo(move |_| {
        slice.with(|s| ChartModel::from_points(stats.title(), &s.items, stats.top_n))
    });
    let (hovered, set_hovered) = create_signal(None::<usize>);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{move || chart.with(|c| c.title.clone())}</h2>

            {move || {
                let model = chart.get();
                if model.is_empty() {
                    return view! { <p class="text-gray-400">"No data"</p> }.into_view();
                }

                let ticks = model.ticks(TICK_COUNT);
                view! {
                    <ol class="space-y-2">
                        {model
                            .bars
                            .into_iter()
                            .enumerate()
                            .map(|(index, bar)| view! {
                                <li
                                    class="grid grid-cols-[10rem_1fr] items-center gap-3 outline-none"
                                    tabindex="0"
                                    on:mouseenter=move |_| set_hovered.set(Some(index))
                                    on:mouseleave=move |_| set_hovered.set(None)
                                    on:focus=move |_| set_hovered.set(Some(index))
                                    on:blur=move |_| set_hovered.set(None)
                                >
                                    <span class="truncate text-sm text-gray-300">{bar.name}</span>
                                    <div class="h-6 bg-gray-700 rounded">
                                        <div
                                            class="h-6 bg-primary-500 rounded"
                                            style=format!("width: {:.2}%", bar.ratio * 100.0)
                                        />
                                    </div>
                                </li>
                            })
                            .collect_view()}
                    </ol>

                    <div class="relative h-6 mt-2 ml-[10.75rem] text-xs text-gray-500">
                        {ticks
                            .into_iter()
                            .map(|(ratio, label)| view! {
                                <span
                                    class="absolute -translate-x-1/2"
                                    style=format!("left: {:.2}%", ratio * 100.0)
                                >
                                    {label}
                                </span>
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}

            <div class="h-8 mt-4 text-sm" aria-live="polite">
                {move || {
                    hovered
                        .get()
                        .and_then(|index| chart.with(|c| c.tooltip(index)))
                        .map(|tip| view! {
                            <span class="px-3 py-1 bg-gray-900 rounded-lg">
                                <span class="font-medium">{tip.name}</span>
                                ": "
                                <span class="tabular-nums">{tip.label}</span>
                            </span>
                        })
                }}
            </div>
        </section>
    }
}
