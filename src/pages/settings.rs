//! Settings Page
//!
//! Backend connection configuration.

use leptos::*;

use crate::api::{self, LeaderboardClient};
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the leaderboard backend"</p>
            </div>

            <ApiSettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);
    let (saved, set_saved) = create_signal(false);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        api::set_api_base(&url);

        spawn_local(async move {
            let client = LeaderboardClient::new(&url);
            set_test_result.set(Some(client.check_health().await.is_ok()));
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_saved.set(true);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Leaderboard API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| {
                                set_saved.set(false);
                                set_api_url.set(event_target_value(&ev));
                            }
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if saved.get() { "Saved" } else { "Save" }}
                        </button>
                    </div>
                    <p class="text-xs text-gray-500 mt-2">
                        "Takes effect the next time the leaderboard is opened."
                    </p>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Live-update stream status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Live updates:"</span>
                    {
                        let stream_connected = state.stream_connected;
                        move || {
                            if stream_connected.get() {
                                view! { <span class="text-green-400">"🟢 Connected"</span> }.into_view()
                            } else {
                                view! { <span class="text-red-400">"🔴 Disconnected"</span> }.into_view()
                            }
                        }
                    }
                </div>
            </div>
        </section>
    }
}
