//! Global Application State
//!
//! Ambient status shared across the page shell via Leptos context.

use leptos::*;

/// Global application state provided to all components.
///
/// Carries connection status only; the leaderboard list and its loading
/// flag are owned by the mounted view instance, never shared here.
#[derive(Clone)]
pub struct GlobalState {
    /// Live-update stream status
    pub stream_connected: RwSignal<bool>,
    /// Timestamp of the last received snapshot
    pub last_update: RwSignal<Option<i64>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        stream_connected: create_rw_signal(false),
        last_update: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Record that a snapshot just arrived
    pub fn mark_updated(&self) {
        self.last_update
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }
}
