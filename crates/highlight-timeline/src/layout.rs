//! Layout projection from the timeline to proportional bar geometry.
//!
//! Everything is expressed in percent of the bar width so any front end can
//! map it onto its own coordinate space.

use highlight_core::{format_timestamp, Interval};
use tracing::warn;

use crate::timeline::Timeline;

/// Ratios of the total duration that get an axis marker.
pub const MARKER_RATIOS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A positioned segment block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    /// Index of the segment in the timeline.
    pub index: usize,
    pub left_percent: f64,
    pub width_percent: f64,
    /// Tooltip text, `MM:SS ~ MM:SS`.
    pub label: String,
}

/// A time-axis marker.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeMarker {
    pub left_percent: f64,
    pub label: String,
}

/// Full bar layout: blocks in timeline order plus axis markers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarLayout {
    pub blocks: Vec<BlockLayout>,
    pub markers: Vec<TimeMarker>,
}

/// Project an interval to `(left%, width%)`.
///
/// Returns `None` when the raw geometry is non-finite or has negative width.
pub fn project_interval(interval: Interval, total: f64) -> Option<(f64, f64)> {
    if !total.is_finite() || total <= 0.0 {
        return None;
    }
    let raw_left = interval.start / total * 100.0;
    let raw_width = interval.duration() / total * 100.0;
    if !raw_left.is_finite() || !raw_width.is_finite() || raw_width < 0.0 {
        return None;
    }
    let left = raw_left.clamp(0.0, 100.0);
    let width = raw_width.clamp(0.0, 100.0 - left);
    Some((left, width))
}

/// Axis markers at [`MARKER_RATIOS`]. Empty when the duration is unknown.
pub fn time_markers(total: f64) -> Vec<TimeMarker> {
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }
    MARKER_RATIOS
        .iter()
        .map(|ratio| TimeMarker {
            left_percent: ratio * 100.0,
            label: format_timestamp(total * ratio),
        })
        .collect()
}

/// Project the whole timeline.
///
/// Segments whose geometry cannot be drawn are skipped and logged as a data
/// integrity warning.
pub fn project(timeline: &Timeline) -> BarLayout {
    let total = timeline.total_duration();
    let markers = time_markers(total);
    if markers.is_empty() {
        return BarLayout::default();
    }

    let blocks = timeline
        .segments()
        .iter()
        .enumerate()
        .filter_map(|(index, seg)| match project_interval(seg.interval(), total) {
            Some((left_percent, width_percent)) => Some(BlockLayout {
                index,
                left_percent,
                width_percent,
                label: seg.label(),
            }),
            None => {
                warn!(
                    index,
                    start = seg.start,
                    end = seg.end,
                    total,
                    "Skipping segment with invalid geometry"
                );
                None
            }
        })
        .collect();

    BarLayout { blocks, markers }
}

/// Convert a percentage of the bar width back to seconds.
#[inline]
pub fn percent_to_seconds(percent: f64, total: f64) -> f64 {
    percent / 100.0 * total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    #[test]
    fn test_project_interval() {
        let (left, width) = project_interval(Interval::new(25.0, 50.0), 100.0).unwrap();
        assert_eq!(left, 25.0);
        assert_eq!(width, 25.0);
    }

    #[test]
    fn test_width_clamped_to_remaining_space() {
        let (left, width) = project_interval(Interval::new(90.0, 130.0), 100.0).unwrap();
        assert_eq!(left, 90.0);
        assert_eq!(width, 10.0);
    }

    #[test]
    fn test_inverted_and_nan_are_skipped() {
        assert!(project_interval(Interval::new(10.0, 5.0), 100.0).is_none());
        assert!(project_interval(Interval::new(f64::NAN, 5.0), 100.0).is_none());
        assert!(project_interval(Interval::new(0.0, 5.0), 0.0).is_none());
    }

    #[test]
    fn test_markers() {
        let markers = time_markers(120.0);
        let labels: Vec<&str> = markers.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["00:00", "00:30", "01:00", "01:30", "02:00"]);
        assert_eq!(markers[2].left_percent, 50.0);
        assert!(time_markers(0.0).is_empty());
    }

    #[test]
    fn test_project_skips_bad_segments() {
        let mut timeline = Timeline::new(100.0);
        timeline.restore(vec![
            Segment::new(0.0, 10.0, 0.5),
            Segment::new(30.0, 20.0, 0.5),
            Segment::new(50.0, 60.0, 0.5),
        ]);
        let layout = project(&timeline);
        assert_eq!(layout.blocks.len(), 2);
        assert_eq!(layout.blocks[1].index, 2);
        assert_eq!(layout.blocks[1].label, "00:50 ~ 01:00");
        assert_eq!(layout.markers.len(), 5);
    }

    #[test]
    fn test_project_without_duration_is_empty() {
        let timeline = Timeline::from_segments(vec![Segment::new(0.0, 1.0, 0.5)], 0.0);
        assert_eq!(project(&timeline), BarLayout::default());
    }

    #[test]
    fn test_percent_to_seconds() {
        assert_eq!(percent_to_seconds(50.0, 80.0), 40.0);
    }
}
