//! App Root Component
//!
//! Creates the stores, starts both loads once, and lays out the routes.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Dashboard, Settings};
use crate::state::{provide_stores, CountyStore, StatsStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let (counties, stats) = provide_stores();

    // Fetch once on startup; the stores settle independently
    counties.load();
    stats.load();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer with the last successful load time
#[component]
fn Footer() -> impl IntoView {
    let counties = use_context::<CountyStore>().expect("CountyStore not found");
    let stats = use_context::<StatsStore>().expect("StatsStore not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || {
                        counties
                            .store
                            .loaded_at()
                            .max(stats.store.loaded_at())
                            .map(|dt| {
                                format!(
                                    "Last updated: {}",
                                    dt.with_timezone(&chrono::Local).format("%H:%M:%S")
                                )
                            })
                            .unwrap_or_else(|| "Not loaded".to_string())
                    }}
                </div>

                {move || {
                    if counties.store.is_loading() || stats.store.is_loading() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
