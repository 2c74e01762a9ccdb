//! Dashboard Page
//!
//! Main page composing the live leaderboard into the page shell.

use leptos::*;

use crate::components::Leaderboard;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"🎮 Gaming Leaderboard"</h1>
                <p class="text-gray-400 mt-1">"Top players, ranked by total score"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <Leaderboard />
            </section>
        </div>
    }
}
