//! Loading Component
//!
//! Loading placeholder shown while the initial fetch is in flight.

use leptos::*;

/// Full-width loading spinner with a label
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3">
            <div class="loading-spinner w-8 h-8" />
            <span class="text-gray-400">"Loading leaderboard..."</span>
        </div>
    }
}
