//! Highlight segment type.

use highlight_core::Interval;
use serde::{Deserialize, Serialize};

fn default_score() -> f64 {
    0.5
}

/// One highlight clip: a time interval plus the pipeline's score.
///
/// Field names on the wire follow the pipeline output (`start_time`,
/// `end_time`, `score`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds
    #[serde(rename = "start_time")]
    pub start: f64,
    /// End time in seconds
    #[serde(rename = "end_time")]
    pub end: f64,
    /// Opaque weight (0..1), carried through untouched
    #[serde(default = "default_score")]
    pub score: f64,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: f64, end: f64, score: f64) -> Self {
        Self { start, end, score }
    }

    /// Create a segment from an interval.
    pub fn from_interval(interval: Interval, score: f64) -> Self {
        Self::new(interval.start, interval.end, score)
    }

    /// The segment's time interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// Length in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Replace both endpoints.
    #[inline]
    pub fn set_interval(&mut self, interval: Interval) {
        self.start = interval.start;
        self.end = interval.end;
    }

    /// Display label, e.g. `00:27 ~ 00:32`.
    pub fn label(&self) -> String {
        self.interval().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let seg: Segment =
            serde_json::from_str(r#"{"start_time": 1.5, "end_time": 4.0, "score": 0.9}"#).unwrap();
        assert_eq!(seg, Segment::new(1.5, 4.0, 0.9));

        let json = serde_json::to_value(seg).unwrap();
        assert_eq!(json["start_time"], 1.5);
        assert_eq!(json["end_time"], 4.0);
    }

    #[test]
    fn test_missing_score_defaults() {
        let seg: Segment = serde_json::from_str(r#"{"start_time": 0, "end_time": 2}"#).unwrap();
        assert_eq!(seg.score, 0.5);
    }

    #[test]
    fn test_label() {
        assert_eq!(Segment::new(65.0, 70.9, 0.1).label(), "01:05 ~ 01:10");
    }
}
