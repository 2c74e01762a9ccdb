//! State Management
//!
//! Data model, per-view leaderboard state, global status, and the
//! live-update stream connection.

pub mod global;
pub mod leaderboard;
pub mod stream;

pub use global::{provide_global_state, GlobalState};
pub use leaderboard::{LeaderboardSnapshot, LeaderboardState, PlayerEntry, UserId};
pub use stream::LeaderboardStream;
