//! Highlight server HTTP client.

use std::future::Future;

use highlight_core::Result;
use highlight_timeline::{SaveAck, SaveRequest, SegmentStore, SegmentsFile};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Error body returned by the server on a rejected request.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// [`SegmentStore`] backed by the highlight server.
#[derive(Debug, Clone)]
pub struct HttpSegmentStore {
    http: Client,
    config: ClientConfig,
}

impl HttpSegmentStore {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("highlight-studio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST the edited segments. The server re-renders the highlight.
    pub async fn post_update(&self, request: &SaveRequest) -> ClientResult<SaveAck> {
        let url = self.config.update_url();
        debug!(
            %url,
            file = %request.filename,
            segments = request.segments.len(),
            "Posting highlight update"
        );

        let response = self.http.post(&url).json(request).send().await?;
        let response = Self::check_status(response).await?;

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(SaveAck::default());
        }
        match serde_json::from_slice(&body) {
            Ok(ack) => Ok(ack),
            Err(e) => {
                warn!(error = %e, "Update accepted with an unreadable body");
                Ok(SaveAck::default())
            }
        }
    }

    /// Fetch the pipeline result for `file_name`.
    ///
    /// A missing result (404) is an empty file, not an error.
    pub async fn fetch_segments(&self, file_name: &str) -> ClientResult<SegmentsFile> {
        let url = self.config.segments_url(file_name);
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            info!(file = %file_name, "No segments on server, starting empty");
            return Ok(SegmentsFile::empty());
        }
        let response = Self::check_status(response).await?;
        let body = response.bytes().await?;
        let file: SegmentsFile = serde_json::from_slice(&body)?;
        info!(
            file = %file_name,
            segments = file.segments.len(),
            "Fetched segments"
        );
        Ok(file)
    }

    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let status_text = status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty());
        warn!(status = status.as_u16(), ?message, "Server rejected request");
        Err(ClientError::Status {
            status: status.as_u16(),
            status_text,
            message,
        })
    }
}

impl SegmentStore for HttpSegmentStore {
    fn update_highlights(
        &self,
        request: &SaveRequest,
    ) -> impl Future<Output = Result<SaveAck>> + Send {
        async move {
            self.post_update(request).await.map_err(|e| {
                warn!(error = %e, "Highlight update failed");
                e.into()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highlight_core::HighlightError;
    use highlight_timeline::Segment;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store(server: &MockServer) -> HttpSegmentStore {
        HttpSegmentStore::new(ClientConfig::with_base_url(server.uri())).unwrap()
    }

    fn request() -> SaveRequest {
        SaveRequest {
            filename: "talk.mp4".into(),
            segments: vec![Segment::new(2.0, 7.5, 0.5)],
        }
    }

    #[tokio::test]
    async fn test_update_posts_filename_and_segments() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload/update-highlights"))
            .and(body_json(json!({
                "filename": "talk.mp4",
                "segments": [{"start_time": 2.0, "end_time": 7.5, "score": 0.5}]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"video_url": "/clips/highlight_talk.mp4"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ack = store(&server).update_highlights(&request()).await.unwrap();
        assert_eq!(ack.media_url.as_deref(), Some("/clips/highlight_talk.mp4"));
    }

    #[tokio::test]
    async fn test_update_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload/update-highlights"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let ack = store(&server).update_highlights(&request()).await.unwrap();
        assert_eq!(ack, SaveAck::default());
    }

    #[tokio::test]
    async fn test_update_error_uses_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "ffmpeg exited with 1"})),
            )
            .mount(&server)
            .await;

        let err = store(&server)
            .update_highlights(&request())
            .await
            .unwrap_err();
        match err {
            HighlightError::Persistence(message) => assert_eq!(message, "ffmpeg exited with 1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_error_without_message_uses_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
            .mount(&server)
            .await;

        let err = store(&server).post_update(&request()).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "Service Unavailable");
    }

    #[tokio::test]
    async fn test_fetch_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/results/segments/talk.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "segments": [{"start_time": 1.0, "end_time": 4.0, "score": 0.9}],
                "original_duration": 120.0
            })))
            .mount(&server)
            .await;

        let file = store(&server).fetch_segments("talk.mp4").await.unwrap();
        assert_eq!(file.segments.len(), 1);
        assert_eq!(file.duration_or(0.0), 120.0);
    }

    #[tokio::test]
    async fn test_fetch_missing_segments_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let file = store(&server).fetch_segments("new.mp4").await.unwrap();
        assert_eq!(file, SegmentsFile::empty());
    }

    #[tokio::test]
    async fn test_connection_refused_is_persistence_error() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9");
        let err = HttpSegmentStore::new(config)
            .unwrap()
            .update_highlights(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, HighlightError::Persistence(_)));
    }
}
