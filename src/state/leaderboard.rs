//! Leaderboard State
//!
//! Data model and per-view state machine for the ranked player list.

use leptos::*;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// One ranked participant from the backend
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PlayerEntry {
    pub user_id: UserId,
    pub user_name: String,
    pub total_score: i64,
}

/// Opaque player identifier. The backend sends numbers today, but the id
/// is only used as a list key, so strings decode too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// The complete current leaderboard, in display rank order. Rank is
/// positional, not a field of the entry.
pub type LeaderboardSnapshot = Vec<PlayerEntry>;

/// Reactive state owned by a single mounted leaderboard view.
///
/// The displayed list is always exactly the most recently received
/// snapshot; there is no merging of partial updates.
#[derive(Clone)]
pub struct LeaderboardState {
    /// Most recent snapshot (initial fetch result or pushed update)
    pub players: RwSignal<LeaderboardSnapshot>,
    /// True until the initial fetch settles
    pub loading: RwSignal<bool>,
    mounted: Rc<Cell<bool>>,
}

impl LeaderboardState {
    pub fn new() -> Self {
        Self {
            players: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Record the initial fetch result and clear the loading flag.
    ///
    /// The fetch and the push stream are unordered relative to each other;
    /// whichever lands last wins, so a snapshot pushed before the fetch
    /// settled is overwritten here.
    pub fn finish_initial_load(&self, players: LeaderboardSnapshot) {
        if !self.mounted.get() {
            return;
        }
        self.players.set(players);
        self.loading.set(false);
    }

    /// Replace the displayed leaderboard with a pushed snapshot. The
    /// loading flag is not touched; the two signals are independent.
    pub fn apply_snapshot(&self, snapshot: LeaderboardSnapshot) {
        if !self.mounted.get() {
            return;
        }
        self.players.set(snapshot);
    }

    /// Mark the owning view as unmounted. The in-flight fetch has no
    /// cancellation handle, so a late result must become a no-op.
    pub fn detach(&self) {
        self.mounted.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str, score: i64) -> PlayerEntry {
        PlayerEntry {
            user_id: UserId::Number(id),
            user_name: name.to_string(),
            total_score: score,
        }
    }

    #[test]
    fn starts_loading_with_no_players() {
        let runtime = create_runtime();
        let state = LeaderboardState::new();

        assert!(state.loading.get_untracked());
        assert!(state.players.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn initial_fetch_sets_players_and_clears_loading() {
        let runtime = create_runtime();
        let state = LeaderboardState::new();

        state.finish_initial_load(vec![entry(1, "Ann", 50)]);

        assert!(!state.loading.get_untracked());
        assert_eq!(state.players.get_untracked(), vec![entry(1, "Ann", 50)]);

        runtime.dispose();
    }

    #[test]
    fn empty_fetch_result_still_clears_loading() {
        let runtime = create_runtime();
        let state = LeaderboardState::new();

        state.finish_initial_load(Vec::new());

        assert!(!state.loading.get_untracked());
        assert!(state.players.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn push_before_fetch_shows_data_but_keeps_loading() {
        let runtime = create_runtime();
        let state = LeaderboardState::new();

        state.apply_snapshot(vec![entry(2, "Bo", 90)]);

        assert!(state.loading.get_untracked());
        assert_eq!(state.players.get_untracked(), vec![entry(2, "Bo", 90)]);

        // The fetch settles afterwards and wins (last write).
        state.finish_initial_load(vec![entry(1, "Ann", 50)]);

        assert!(!state.loading.get_untracked());
        assert_eq!(state.players.get_untracked(), vec![entry(1, "Ann", 50)]);

        runtime.dispose();
    }

    #[test]
    fn pushed_snapshot_replaces_players_wholesale() {
        let runtime = create_runtime();
        let state = LeaderboardState::new();

        state.finish_initial_load(vec![entry(1, "Ann", 50)]);
        state.apply_snapshot(vec![entry(2, "Bo", 90), entry(1, "Ann", 50)]);

        let players = state.players.get_untracked();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].user_name, "Bo");
        assert_eq!(players[1].user_name, "Ann");
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn detached_state_ignores_late_results() {
        let runtime = create_runtime();
        let state = LeaderboardState::new();

        state.detach();

        state.finish_initial_load(vec![entry(1, "Ann", 50)]);
        state.apply_snapshot(vec![entry(2, "Bo", 90)]);

        assert!(state.loading.get_untracked());
        assert!(state.players.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn user_id_displays_opaque_value() {
        assert_eq!(UserId::Number(42).to_string(), "42");
        assert_eq!(UserId::Text("abc".to_string()).to_string(), "abc");
    }
}
