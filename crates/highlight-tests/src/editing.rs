//! Integration tests for the editing workflow.
//!
//! Exercises highlight-core time helpers through the highlight-timeline
//! editor, from a pipeline result to the projected layout.

use highlight_core::{format_timestamp, Interval};
use highlight_timeline::{
    EditError, EditMode, EditorContext, HighlightEditor, NoticeQueue, ResizeEdge, Segment,
    SegmentsFile, Severity,
};

// ── Helpers ────────────────────────────────────────────────────

const PIPELINE_RESULT: &str = r#"{
    "segments": [
        {"start_time": 95.0, "end_time": 101.5, "score": 0.64},
        {"start_time": 12.0, "end_time": 18.0, "score": 0.91},
        {"start_time": 40.0, "end_time": 47.0, "score": 0.77}
    ],
    "original_duration": 180.0
}"#;

fn editor() -> (HighlightEditor, NoticeQueue) {
    let queue = NoticeQueue::new();
    let mut editor = HighlightEditor::builder()
        .context(EditorContext::new("keynote.mp4"))
        .notifier(queue.clone())
        .build()
        .unwrap();
    let file = SegmentsFile::from_json(PIPELINE_RESULT.as_bytes()).unwrap();
    editor.load_file(&file, 0.0);
    (editor, queue)
}

// ── Loading & projection ───────────────────────────────────────

#[test]
fn pipeline_result_loads_sorted() {
    let (editor, _) = editor();
    let starts: Vec<f64> = editor.segments().iter().map(|s| s.start).collect();
    assert_eq!(starts, vec![12.0, 40.0, 95.0]);
    assert_eq!(editor.timeline().total_duration(), 180.0);
    assert!(editor.timeline().is_consistent());
}

#[test]
fn layout_matches_timeline() {
    let (editor, _) = editor();
    let layout = editor.layout();
    assert_eq!(layout.blocks.len(), 3);
    assert_eq!(layout.blocks[1].label, "00:40 ~ 00:47");
    let markers: Vec<&str> = layout.markers.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(markers, vec!["00:00", "00:45", "01:30", "02:15", "03:00"]);
}

#[test]
fn total_selected_sums_durations() {
    let (editor, _) = editor();
    assert_eq!(editor.total_selected(), 19.5);
    assert_eq!(format_timestamp(editor.total_selected()), "00:19");
}

// ── Edit session ───────────────────────────────────────────────

#[test]
fn edit_then_cancel_is_lossless() {
    let (mut editor, queue) = editor();
    let before = editor.segments().to_vec();

    editor.enter_edit();
    editor.add_segment_at(150.0).unwrap();
    editor.begin_resize(0, ResizeEdge::Left).unwrap();
    editor.update_drag(-5.0);
    editor.end_drag();
    editor.begin_move(1).unwrap();
    editor.update_drag(10.0);
    editor.end_drag();
    assert_ne!(editor.segments(), before.as_slice());

    editor.cancel_edit();
    assert_eq!(editor.segments(), before.as_slice());
    assert_eq!(editor.mode(), EditMode::View);
    assert!(queue.drain().iter().any(|n| n.severity == Severity::Info));
}

#[test]
fn resize_stops_at_neighbor_and_move_respects_gaps() {
    let (mut editor, _) = editor();
    editor.enter_edit();

    // Stretch [12, 18] right into [40, 47]
    editor.begin_resize(0, ResizeEdge::Right).unwrap();
    assert_eq!(editor.update_drag(60.0), Some(Interval::new(12.0, 40.0)));
    editor.end_drag();

    // Move [40, 47] left: it cannot pass the resized neighbor
    editor.begin_move(1).unwrap();
    assert_eq!(editor.update_drag(-30.0), Some(Interval::new(40.0, 47.0)));
    editor.end_drag();

    assert!(editor.timeline().is_consistent());
}

#[test]
fn add_near_end_reanchors() {
    let (mut editor, _) = editor();
    editor.enter_edit();
    let index = editor.add_segment_at(179.0).unwrap();
    let added = editor.segments()[index];
    assert_eq!(added.end, 180.0);
    assert_eq!(added.start, 175.0);
    assert_eq!(added.score, 0.5);
}

#[test]
fn add_inside_existing_is_rejected() {
    let (mut editor, queue) = editor();
    editor.enter_edit();
    queue.drain();
    assert!(matches!(
        editor.add_segment_at(44.0),
        Err(EditError::PlacementOverlap { .. })
    ));
    assert_eq!(editor.segments().len(), 3);
    assert_eq!(queue.drain().len(), 1);
}

#[test]
fn save_request_carries_sorted_segments() {
    let (mut editor, _) = editor();
    editor.enter_edit();
    editor.add_segment_at(5.0).unwrap();
    let request = editor.begin_save().unwrap();
    assert_eq!(request.filename, "keynote.mp4");
    assert_eq!(request.segments.len(), 4);
    assert!(request
        .segments
        .windows(2)
        .all(|w| w[0].end <= w[1].start));
    assert_eq!(request.segments[0], Segment::new(2.5, 7.5, 0.5));
}
