//! Client error types.

use highlight_core::HighlightError;
use thiserror::Error;

fn reason<'a>(message: &'a Option<String>, status_text: &'a str) -> &'a str {
    message.as_deref().unwrap_or(status_text)
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{}", reason(.message, .status_text))]
    Status {
        status: u16,
        /// Status reason phrase, used when the body carries no message.
        status_text: String,
        /// `message` field of the error body, if any.
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Json(_) => None,
        }
    }
}

impl From<ClientError> for HighlightError {
    fn from(err: ClientError) -> Self {
        HighlightError::Persistence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_prefers_server_message() {
        let err = ClientError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
            message: Some("ffmpeg failed".into()),
        };
        assert_eq!(err.to_string(), "ffmpeg failed");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_status_falls_back_to_reason() {
        let err = ClientError::Status {
            status: 502,
            status_text: "Bad Gateway".into(),
            message: None,
        };
        assert_eq!(
            HighlightError::from(err).to_string(),
            HighlightError::Persistence("Bad Gateway".into()).to_string()
        );
    }
}
