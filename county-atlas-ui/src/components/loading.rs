//! Loading Component

use leptos::*;

/// Full-width loading spinner with a caption
#[component]
pub fn Loading(
    #[prop(default = "Loading county data...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-4" role="status">
            <div class="loading-spinner w-8 h-8" />
            <span class="text-gray-400">{message}</span>
        </div>
    }
}
