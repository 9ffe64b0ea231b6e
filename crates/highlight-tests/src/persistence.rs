//! Integration tests for saving through the HTTP client.
//!
//! Exercises highlight-timeline's save flow against highlight-client's
//! `HttpSegmentStore` with a mocked server.

use highlight_client::{ClientConfig, HttpSegmentStore};
use highlight_timeline::{
    EditError, EditorContext, HighlightEditor, NoticeQueue, Segment, Severity,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn editor(queue: &NoticeQueue) -> HighlightEditor {
    let mut editor = HighlightEditor::builder()
        .context(EditorContext::new("talk.mp4"))
        .notifier(queue.clone())
        .build()
        .unwrap();
    editor.load(
        &[Segment::new(10.0, 20.0, 0.8), Segment::new(30.0, 35.0, 0.6)],
        120.0,
    );
    editor
}

fn store(server: &MockServer) -> HttpSegmentStore {
    HttpSegmentStore::new(ClientConfig::with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn fetch_then_edit_then_save() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/results/segments/talk.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "segments": [{"start_time": 10.0, "end_time": 20.0, "score": 0.8}],
            "original_duration": 60.0
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload/update-highlights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = store(&server);
    let queue = NoticeQueue::new();
    let mut editor = HighlightEditor::builder()
        .context(EditorContext::new("talk.mp4"))
        .notifier(queue.clone())
        .build()
        .unwrap();

    let file = store.fetch_segments("talk.mp4").await.unwrap();
    editor.load_file(&file, 0.0);
    editor.enter_edit();
    editor.add_segment_at(40.0).unwrap();
    editor.save(&store).await.unwrap();

    assert!(!editor.is_editing());
    assert_eq!(editor.session().last_saved().unwrap().len(), 2);
    assert_eq!(
        editor.media_url().as_deref(),
        Some("/clips/highlight_talk.mp4?t=1")
    );
    assert_eq!(queue.drain().last().unwrap().severity, Severity::Success);
}

#[tokio::test]
async fn rejected_save_keeps_edit_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "segment list too long"})),
        )
        .mount(&server)
        .await;

    let queue = NoticeQueue::new();
    let mut editor = editor(&queue);
    editor.enter_edit();
    editor.delete_segment(1).unwrap();
    queue.drain();

    let err = editor.save(&store(&server)).await.unwrap_err();
    assert_eq!(
        err,
        EditError::Persistence {
            message: "segment list too long".into()
        }
    );
    assert!(editor.is_editing());
    assert_eq!(editor.segments().len(), 1);

    let notices = queue.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Error);

    // The user can still discard the edit
    editor.cancel_edit();
    assert_eq!(editor.segments().len(), 2);
}

#[tokio::test]
async fn invalid_timeline_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let queue = NoticeQueue::new();
    let mut editor = editor(&queue);
    editor.enter_edit();
    editor.delete_segment(0).unwrap();
    editor.delete_segment(0).unwrap();

    assert_eq!(
        editor.save(&store(&server)).await,
        Err(EditError::EmptyTimeline)
    );
}
