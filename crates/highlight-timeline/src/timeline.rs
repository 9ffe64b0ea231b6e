//! Ordered segment collection over a fixed source duration.

use highlight_core::{clamp_seconds, Interval};
use serde::Serialize;

use crate::segment::Segment;

/// Highlight segments sorted by start over `[0, total_duration]`.
///
/// Ordering is restored by [`Timeline::resort`]; non-overlap is enforced by
/// the edit geometry before values reach the timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Timeline {
    segments: Vec<Segment>,
    total_duration: f64,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new(total_duration: f64) -> Self {
        Self {
            segments: Vec::new(),
            total_duration,
        }
    }

    /// Create a timeline from owned segments, sorted by start.
    pub fn from_segments(segments: Vec<Segment>, total_duration: f64) -> Self {
        let mut timeline = Self {
            segments,
            total_duration,
        };
        timeline.resort();
        timeline
    }

    /// Replace the content with a copy of `segments`.
    ///
    /// Input overlap is not checked here; it is re-validated on save.
    pub fn load(&mut self, segments: &[Segment], total_duration: f64) {
        self.segments = segments.to_vec();
        self.total_duration = total_duration;
        self.resort();
    }

    /// Segments in start order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Source duration in seconds.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`.
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// Segment before `index` in start order.
    pub fn previous(&self, index: usize) -> Option<&Segment> {
        index.checked_sub(1).and_then(|i| self.segments.get(i))
    }

    /// Segment after `index` in start order.
    pub fn next(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index + 1)
    }

    /// Append a segment and restore start order. Returns its new index.
    ///
    /// Does not reject overlaps; callers check placement first.
    pub fn insert(&mut self, segment: Segment) -> usize {
        self.segments.push(segment);
        self.resort();
        self.segments
            .iter()
            .rposition(|s| *s == segment)
            .unwrap_or(self.segments.len() - 1)
    }

    /// Remove the segment at `index`. Later indices shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Segment> {
        if index < self.segments.len() {
            Some(self.segments.remove(index))
        } else {
            None
        }
    }

    /// Stable ascending sort by start.
    pub fn resort(&mut self) {
        self.segments.sort_by(|a, b| a.start.total_cmp(&b.start));
    }

    /// Clamp a time value into `[0, total_duration]`.
    pub fn clamp(&self, seconds: f64) -> f64 {
        clamp_seconds(seconds, self.total_duration)
    }

    /// Index of the first segment strictly intersecting `interval`.
    pub fn find_overlap(&self, interval: Interval) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| s.interval().overlaps(interval))
    }

    /// Index of the segment containing `time`.
    pub fn segment_at(&self, time: f64) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| s.interval().contains(time))
    }

    /// Sum of all segment durations (length of the resulting highlight).
    pub fn total_selected(&self) -> f64 {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// Value copy of the segment list.
    pub fn snapshot(&self) -> Vec<Segment> {
        self.segments.clone()
    }

    /// Replace the segment list with a snapshot, keeping the duration.
    pub fn restore(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
    }

    /// Drop all segments and the duration.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.total_duration = 0.0;
    }

    /// True when segments are sorted, in bounds, well formed and disjoint.
    pub fn is_consistent(&self) -> bool {
        let in_bounds = self
            .segments
            .iter()
            .all(|s| s.start >= 0.0 && s.start < s.end && s.end <= self.total_duration);
        let disjoint = self.segments.windows(2).all(|w| w[0].end <= w[1].start);
        in_bounds && disjoint
    }
}
