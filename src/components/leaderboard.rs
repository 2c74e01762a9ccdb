//! Leaderboard Component
//!
//! Ranked player table: one initial fetch plus server-pushed full-snapshot
//! updates for as long as the view is mounted.

use leptos::*;

use crate::api::{self, LeaderboardClient};
use crate::components::Loading;
use crate::state::global::GlobalState;
use crate::state::leaderboard::{LeaderboardSnapshot, LeaderboardState};

/// Live leaderboard view
#[component]
pub fn Leaderboard() -> impl IntoView {
    let global = use_context::<GlobalState>().expect("GlobalState not found");
    let state = LeaderboardState::new();
    let client = LeaderboardClient::new(&api::get_api_base());

    let players = state.players;
    let loading = state.loading;

    // Initial fetch. Fail-soft: an unreachable backend renders as an empty
    // table, never as an error state.
    {
        let state = state.clone();
        let client = client.clone();
        create_effect(move |_| {
            let state = state.clone();
            let client = client.clone();
            spawn_local(async move {
                let players = client.fetch_top_players().await;
                state.finish_initial_load(players);
            });
        });
    }

    // Live updates, opened concurrently with the fetch. Every event
    // replaces the whole list; no reconnect on failure.
    let stream = match client.open_live_updates() {
        Ok(stream) => Some(stream),
        Err(e) => {
            web_sys::console::error_1(
                &format!("Failed to open leaderboard stream: {}", e).into(),
            );
            None
        }
    };

    if let Some(stream) = &stream {
        {
            let global = global.clone();
            stream.on_open(move || {
                global.stream_connected.set(true);
            });
        }
        {
            let state = state.clone();
            let global = global.clone();
            stream.on_snapshot(move |snapshot| {
                state.apply_snapshot(snapshot);
                global.mark_updated();
            });
        }
        {
            let handle = stream.clone();
            let global = global.clone();
            stream.on_error(move || {
                handle.close();
                global.stream_connected.set(false);
            });
        }
    }

    // Guaranteed teardown: drop the subscription and ignore any fetch
    // result that lands after the view is gone.
    on_cleanup(move || {
        state.detach();
        if let Some(stream) = &stream {
            stream.close();
        }
        global.stream_connected.set(false);
    });

    view! {
        <div>
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! { <LeaderboardTable players=players /> }.into_view()
                }
            }}
        </div>
    }
}

/// Rendered ranking table. Rank is the 1-based position in the snapshot,
/// not a field of the entry.
#[component]
fn LeaderboardTable(players: RwSignal<LeaderboardSnapshot>) -> impl IntoView {
    view! {
        <table class="w-full text-left">
            <thead>
                <tr class="border-b border-gray-700 text-sm text-gray-400 uppercase">
                    <th class="py-3 pr-4">"Rank"</th>
                    <th class="py-3 pr-4">"User"</th>
                    <th class="py-3">"Total Score"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    players.get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, player)| {
                            view! {
                                <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-700/50">
                                    <td class="py-3 pr-4 font-semibold">{index + 1}</td>
                                    <td class="py-3 pr-4">{player.user_name}</td>
                                    <td class="py-3">{player.total_score}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
