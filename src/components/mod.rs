//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod leaderboard;
pub mod loading;
pub mod nav;

pub use leaderboard::Leaderboard;
pub use loading::Loading;
pub use nav::Nav;
