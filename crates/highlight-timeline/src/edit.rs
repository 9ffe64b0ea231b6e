//! Edit geometry for segment mutations.
//!
//! Every pointer-driven change is resolved here against the timeline bounds,
//! the neighbors in start order, and the minimum segment duration. The
//! functions only compute proposed values; [`crate::HighlightEditor`] decides
//! when they are written back.

use highlight_core::{clamp_seconds, Interval};

use crate::config::EditorConfig;
use crate::error::{EditError, EditResult};
use crate::timeline::Timeline;

// ── Placement ───────────────────────────────────────────────────

/// Compute the interval for a segment added by clicking at `at` seconds.
///
/// The candidate is centered on the click and clamped into the timeline. If
/// clamping cut it short, the far edge is pushed out again on the side that
/// still has room.
pub fn place_new_segment(
    timeline: &Timeline,
    at: f64,
    config: &EditorConfig,
) -> EditResult<Interval> {
    let total = timeline.total_duration();
    if !total.is_finite() || total <= 0.0 {
        return Err(EditError::NoDuration);
    }

    let desired = config.new_segment_duration(total);
    let mut candidate = Interval::centered(timeline.clamp(at), desired).clamped(total);

    if candidate.duration() < desired - config.reanchor_tolerance {
        if candidate.start <= 0.0 {
            candidate.end = (candidate.start + desired).min(total);
        } else if candidate.end >= total {
            candidate.start = (candidate.end - desired).max(0.0);
        }
    }

    if candidate.duration() < config.min_segment_duration {
        return Err(EditError::SegmentTooShort {
            duration: candidate.duration(),
        });
    }
    if timeline.find_overlap(candidate).is_some() {
        return Err(EditError::PlacementOverlap {
            start: candidate.start,
            end: candidate.end,
        });
    }
    Ok(candidate)
}

// ── Resize ──────────────────────────────────────────────────────

/// Which edge of a segment is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
}

/// Resolve a proposed edge position for the segment at `index`.
///
/// Order: global bounds, then the neighbor on the dragged side, then the
/// minimum duration against the opposite edge. The minimum duration wins
/// when it conflicts with the earlier clamps.
pub fn resolve_resize(
    timeline: &Timeline,
    index: usize,
    edge: ResizeEdge,
    proposed: f64,
    config: &EditorConfig,
) -> EditResult<Interval> {
    let segment = timeline.get(index).ok_or(EditError::IndexOutOfRange {
        index,
        len: timeline.len(),
    })?;
    let min = config.min_segment_duration;

    match edge {
        ResizeEdge::Left => {
            let mut start = timeline.clamp(proposed);
            if let Some(prev) = timeline.previous(index) {
                start = start.max(prev.end);
            }
            start = start.min(segment.end - min);
            Ok(Interval::new(start, segment.end))
        }
        ResizeEdge::Right => {
            let mut end = timeline.clamp(proposed);
            if let Some(next) = timeline.next(index) {
                end = end.min(next.start);
            }
            end = end.max(segment.start + min);
            Ok(Interval::new(segment.start, end))
        }
    }
}

/// Live resize of one segment edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDrag {
    pub index: usize,
    pub edge: ResizeEdge,
    /// Segment bounds when the drag started.
    pub initial: Interval,
}

impl ResizeDrag {
    /// Edge position proposed by a pointer delta (seconds since drag start).
    pub fn proposed_edge(&self, delta: f64) -> f64 {
        match self.edge {
            ResizeEdge::Left => self.initial.start + delta,
            ResizeEdge::Right => self.initial.end + delta,
        }
    }
}

// ── Move ────────────────────────────────────────────────────────

/// Resolve a proposed start for moving a segment of fixed `duration`.
///
/// Clamped to `[0, total - duration]`, then above the previous neighbor's
/// end and below the next neighbor's start minus the duration.
pub fn resolve_move(timeline: &Timeline, index: usize, duration: f64, proposed: f64) -> f64 {
    let latest = (timeline.total_duration() - duration).max(0.0);
    let mut start = clamp_seconds(proposed, latest);
    if let Some(prev) = timeline.previous(index) {
        start = start.max(prev.end);
    }
    if let Some(next) = timeline.next(index) {
        start = start.min(next.start - duration);
    }
    start
}

/// Whole-segment move. The model is untouched until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDrag {
    pub index: usize,
    /// Start when the drag started.
    pub initial_start: f64,
    /// Invariant during the move.
    pub duration: f64,
    /// Latest resolved start, shown by the ghost.
    pub proposed_start: f64,
}

impl MoveDrag {
    /// Interval the segment would occupy if released now.
    pub fn proposed(&self) -> Interval {
        Interval::new(self.proposed_start, self.proposed_start + self.duration)
    }
}

// ── Interaction ─────────────────────────────────────────────────

/// The single pointer drag in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Resize(ResizeDrag),
    Move(MoveDrag),
}

impl Interaction {
    /// Index of the segment being dragged.
    pub fn index(&self) -> usize {
        match self {
            Self::Resize(drag) => drag.index,
            Self::Move(drag) => drag.index,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
