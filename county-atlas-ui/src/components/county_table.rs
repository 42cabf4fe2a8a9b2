//! County Table
//!
//! Searchable table over the raw county list. The search term is local to
//! the component and never touches the store.

use leptos::*;

use county_atlas::view::{TableModel, EMPTY_MESSAGE};

use crate::state::CountyStore;

#[component]
pub fn CountyTable() -> impl IntoView {
    let counties = use_context::<CountyStore>().expect("CountyStore not found");
    let slice = counties.store.slice();

    let (search, set_search) = create_signal(String::new());

    let model = create_memo(move |_| {
        let term = search.get();
        slice.with(|s| TableModel::build(&s.items, &term))
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Counties"</h2>
                <input
                    type="search"
                    placeholder="Search by name, code or province"
                    aria-label="Search counties"
                    class="w-72 bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-sm"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="py-2">"Code"</th>
                        <th class="py-2">"Name"</th>
                        <th class="py-2">"Former Province"</th>
                        <th class="py-2 text-right">"Area (km²)"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let model = model.get();
                        if model.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="4" class="py-6 text-center text-gray-400">
                                        {EMPTY_MESSAGE}
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            model
                                .rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr class="border-b border-gray-700/50 hover:bg-gray-700/40">
                                        <td class="py-2 font-mono">{row.code}</td>
                                        <td class="py-2">{row.name}</td>
                                        <td class="py-2">{row.province}</td>
                                        <td class="py-2 text-right tabular-nums">{row.area}</td>
                                    </tr>
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>

            <p class="mt-4 text-sm text-gray-400">{move || model.get().summary()}</p>
        </section>
    }
}
