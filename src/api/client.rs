//! HTTP API Client
//!
//! Functions for communicating with the leaderboard REST API.

use gloo_net::http::Request;

use crate::state::leaderboard::LeaderboardSnapshot;
use crate::state::stream::LeaderboardStream;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("leaderboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("leaderboard_api_url", url);
        }
    }
}

// ============ Response Types ============

/// The two framings the backend uses for a snapshot: a bare array, or the
/// array wrapped under a `players` field (the stream sends the wrapped
/// form, with an `updatedAt` alongside that is ignored here).
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Players(LeaderboardSnapshot),
    Wrapped { players: LeaderboardSnapshot },
}

impl SnapshotPayload {
    fn into_players(self) -> LeaderboardSnapshot {
        match self {
            SnapshotPayload::Players(players) => players,
            SnapshotPayload::Wrapped { players } => players,
        }
    }
}

/// Decode a leaderboard snapshot from JSON text, accepting either framing.
pub fn parse_snapshot(text: &str) -> Result<LeaderboardSnapshot, String> {
    serde_json::from_str::<SnapshotPayload>(text)
        .map(SnapshotPayload::into_players)
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Client ============

/// Client for one leaderboard backend, bound to a base address.
#[derive(Clone)]
pub struct LeaderboardClient {
    base: String,
}

impl LeaderboardClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the current top players.
    ///
    /// Never fails from the caller's point of view: transport and parse
    /// errors are logged and collapse to an empty leaderboard.
    pub async fn fetch_top_players(&self) -> LeaderboardSnapshot {
        match self.request_top_players().await {
            Ok(players) => players,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to fetch top players: {}", e).into(),
                );
                Vec::new()
            }
        }
    }

    async fn request_top_players(&self) -> Result<LeaderboardSnapshot, String> {
        let response = Request::get(&format!("{}/api/leaderboard/top", self.base))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("Server returned status {}", response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| format!("Read error: {}", e))?;

        parse_snapshot(&text)
    }

    /// Open the live-update stream. The handle is returned immediately;
    /// the connection establishes in the background.
    pub fn open_live_updates(&self) -> Result<LeaderboardStream, String> {
        LeaderboardStream::open(&format!("{}/api/leaderboard/stream", self.base))
    }

    /// Check API health
    pub async fn check_health(&self) -> Result<(), String> {
        let response = Request::get(&format!("{}/health", self.base))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err("API is not healthy".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::leaderboard::{PlayerEntry, UserId};

    fn entry(id: i64, name: &str, score: i64) -> PlayerEntry {
        PlayerEntry {
            user_id: UserId::Number(id),
            user_name: name.to_string(),
            total_score: score,
        }
    }

    #[test]
    fn bare_array_passes_through_unchanged() {
        let players = parse_snapshot(
            r#"[{"user_id":2,"user_name":"Bo","total_score":90},
                {"user_id":1,"user_name":"Ann","total_score":50}]"#,
        )
        .unwrap();

        assert_eq!(players, vec![entry(2, "Bo", 90), entry(1, "Ann", 50)]);
    }

    #[test]
    fn wrapped_players_field_is_unwrapped() {
        // The stream frames snapshots this way, with an updatedAt alongside.
        let players = parse_snapshot(
            r#"{"players":[{"user_id":1,"user_name":"Ann","total_score":50}],
                "updatedAt":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(players, vec![entry(1, "Ann", 50)]);
    }

    #[test]
    fn empty_array_decodes_to_empty_snapshot() {
        assert!(parse_snapshot("[]").unwrap().is_empty());
    }

    #[test]
    fn payload_with_neither_shape_is_rejected() {
        assert!(parse_snapshot("{}").is_err());
        assert!(parse_snapshot("null").is_err());
        assert!(parse_snapshot(r#"{"status":"ok"}"#).is_err());
    }

    #[test]
    fn malformed_body_is_rejected() {
        assert!(parse_snapshot("not json at all").is_err());
        assert!(parse_snapshot(r#"[{"user_id":1}]"#).is_err());
    }

    #[test]
    fn string_user_ids_decode_as_opaque_keys() {
        let players =
            parse_snapshot(r#"[{"user_id":"u-77","user_name":"Kit","total_score":12}]"#)
                .unwrap();

        assert_eq!(players[0].user_id, UserId::Text("u-77".to_string()));
    }

    #[test]
    fn client_normalizes_trailing_slash() {
        let client = LeaderboardClient::new("http://localhost:8000/");
        assert_eq!(client.base, "http://localhost:8000");
    }
}
