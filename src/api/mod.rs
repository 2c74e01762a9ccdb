//! API Layer
//!
//! HTTP client for the leaderboard backend.

pub mod client;

pub use client::{get_api_base, set_api_base, LeaderboardClient};
