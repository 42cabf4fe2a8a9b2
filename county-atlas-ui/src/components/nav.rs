//! Navigation Component
//!
//! Header bar: brand with the active chart title, a data status badge
//! driven by the same decision the dashboard uses, and the page links.

use leptos::*;
use leptos_router::*;

use county_atlas::{present, Presentation};

use crate::state::{CountyStore, StatsStore};

/// Routes shown in the header, in display order
const LINKS: [(&str, &str); 2] = [("/", "Dashboard"), ("/settings", "API Settings")];

/// Compact summary of both stores for the header badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataStatus {
    Syncing,
    Failed,
    Live,
}

impl DataStatus {
    fn of(presentation: Presentation<'_>) -> Self {
        match presentation {
            Presentation::Loading => DataStatus::Syncing,
            Presentation::Error(_) => DataStatus::Failed,
            Presentation::Ready => DataStatus::Live,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DataStatus::Syncing => "Syncing",
            DataStatus::Failed => "Offline",
            DataStatus::Live => "Live",
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            DataStatus::Syncing => "bg-yellow-400 animate-pulse",
            DataStatus::Failed => "bg-red-500",
            DataStatus::Live => "bg-green-500",
        }
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let counties = use_context::<CountyStore>().expect("CountyStore not found");
    let stats = use_context::<StatsStore>().expect("StatsStore not found");

    let county_slice = counties.store.slice();
    let stats_slice = stats.store.slice();
    let status = create_memo(move |_| {
        county_slice.with(|c| stats_slice.with(|s| DataStatus::of(present(&[c, s]))))
    });

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand and active series
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🇰🇪"</span>
                        <div class="leading-tight">
                            <div class="text-xl font-bold text-white">"County Atlas"</div>
                            <div class="text-xs text-gray-400">{stats.title()}</div>
                        </div>
                    </A>

                    <div class="flex items-center space-x-4">
                        // Data status
                        <span
                            class="flex items-center space-x-2 text-sm text-gray-300"
                            title="State of the county and population loads"
                        >
                            <span class=move || format!("w-2 h-2 rounded-full {}", status.get().dot_class()) />
                            <span>{move || status.get().label()}</span>
                        </span>

                        // Page links
                        <div class="flex items-center space-x-1">
                            {LINKS
                                .into_iter()
                                .map(|(href, label)| view! { <NavLink href=href label=label /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
            exact=true
        >
            {label}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use county_atlas::LoadError;

    #[test]
    fn test_status_follows_presentation() {
        let error = LoadError::network("Failed to fetch counties");

        assert_eq!(DataStatus::of(Presentation::Loading), DataStatus::Syncing);
        assert_eq!(DataStatus::of(Presentation::Error(&error)), DataStatus::Failed);
        assert_eq!(DataStatus::of(Presentation::Ready), DataStatus::Live);
        assert_eq!(DataStatus::Failed.label(), "Offline");
    }
}
