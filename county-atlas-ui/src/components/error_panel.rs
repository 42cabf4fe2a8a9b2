//! Error Panel
//!
//! Replaces the dashboard when a store failed. Previously loaded data stays
//! in the stores; a reload re-runs both loads.

use leptos::*;

use county_atlas::{LoadError, LoadErrorKind};

/// Heading for each kind of failure
pub fn error_heading(kind: LoadErrorKind) -> String {
    match kind {
        LoadErrorKind::NetworkFailure => "Cannot reach the county API".to_string(),
        LoadErrorKind::ServerFailure(status) => format!("The county API returned an error ({})", status),
        LoadErrorKind::DecodeFailure => "The county API sent an unexpected response".to_string(),
    }
}

#[component]
pub fn ErrorPanel(
    error: LoadError,
    #[prop(into)]
    on_reload: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 rounded-xl p-6 space-y-3" role="alert">
            <h2 class="text-xl font-semibold text-red-300">{error_heading(error.kind)}</h2>
            <p class="text-gray-200">{error.message}</p>
            <button
                on:click=move |_| on_reload.call(())
                class="px-4 py-2 bg-red-700 hover:bg-red-600 rounded-lg text-sm font-medium transition-colors"
            >
                "Reload"
            </button>
        </div>
    }
}
