//! Client configuration.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the highlight server.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server root, without a trailing slash (default: `http://localhost:3000`).
    pub base_url: String,
    /// Path receiving `{filename, segments}` (default: `/upload/update-highlights`).
    pub update_path: String,
    /// Prefix for pipeline results; the video file name is appended
    /// (default: `/results/segments`).
    pub segments_path: String,
    /// Whole-request timeout. Saves re-render the highlight, so this is long.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            update_path: "/upload/update-highlights".to_string(),
            segments_path: "/results/segments".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Point at a different server, keeping the other defaults.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("HIGHLIGHT_SERVER_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(
                std::env::var("HIGHLIGHT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            connect_timeout: Duration::from_secs(
                std::env::var("HIGHLIGHT_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            ..defaults
        }
    }

    pub fn update_url(&self) -> String {
        format!("{}{}", self.base_url, self.update_path)
    }

    /// Result location for a video, e.g. `.../results/segments/talk.mp4`.
    pub fn segments_url(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.base_url, self.segments_path, file_name)
    }
}
