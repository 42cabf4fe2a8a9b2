//! Settings Page
//!
//! Lets the user point the dashboard at another API origin.

use leptos::*;

use crate::api;
use crate::state::{CountyStore, StatsStore};

#[component]
pub fn Settings() -> impl IntoView {
    let counties = use_context::<CountyStore>().expect("CountyStore not found");
    let stats = use_context::<StatsStore>().expect("StatsStore not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (saved, set_saved) = create_signal(false);

    let save_url = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        set_saved.set(true);

        // Reload from the new origin
        counties.load();
        stats.load();
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the county API connection"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>
                <form on:submit=save_url class="space-y-4">
                    <label class="block">
                        <span class="text-sm text-gray-400">"API base URL"</span>
                        <input
                            type="text"
                            class="mt-1 w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                            placeholder=api::DEFAULT_API_BASE
                            prop:value=api_url
                            on:input=move |ev| {
                                set_saved.set(false);
                                set_api_url.set(event_target_value(&ev));
                            }
                        />
                    </label>
                    <p class="text-xs text-gray-500">
                        "Leave empty to use " {api::DEFAULT_API_BASE} " through the dev server proxy."
                    </p>
                    <div class="flex items-center space-x-3">
                        <button
                            type="submit"
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                        <Show when=move || saved.get()>
                            <span class="text-sm text-green-400">"Saved"</span>
                        </Show>
                    </div>
                </form>
            </section>
        </div>
    }
}
