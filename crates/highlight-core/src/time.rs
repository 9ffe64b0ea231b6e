//! Time representation for highlight editing
//!
//! Segment boundaries are plain seconds (`f64`) over a bounded media
//! duration. Values coming from the pipeline are never frame-aligned, so
//! there is no rational time here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Clamp a time value into `[0, total]`.
///
/// Non-finite input collapses to `0.0`; a non-positive `total` pins
/// everything to zero.
#[inline]
pub fn clamp_seconds(value: f64, total: f64) -> f64 {
    if !value.is_finite() || total <= 0.0 {
        return 0.0;
    }
    value.clamp(0.0, total)
}

/// Format seconds as zero-padded `MM:SS`.
///
/// Whole seconds are floored, never rounded up. Minutes are not wrapped into
/// hours, so an 80 minute source renders as `80:00`. Negative or non-finite
/// input renders as `00:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// A half-open time interval `[start, end)` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Interval {
    /// Start time (inclusive)
    pub start: f64,
    /// End time (exclusive)
    pub end: f64,
}

impl Interval {
    /// Create a new interval from start and end times.
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Create an interval of `duration` centered on `center`.
    #[inline]
    pub fn centered(center: f64, duration: f64) -> Self {
        Self {
            start: center - duration / 2.0,
            end: center + duration / 2.0,
        }
    }

    /// Length of the interval in seconds (negative when inverted).
    #[inline]
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Check if a time is within this interval.
    #[inline]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    /// Strict intersection test: `max(a.start, b.start) < min(a.end, b.end)`.
    ///
    /// Touching endpoints do not count as overlap.
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// Compute the intersection of two intervals, if any.
    pub fn intersection(self, other: Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::new(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Clamp both endpoints into `[0, total]`.
    #[inline]
    pub fn clamped(self, total: f64) -> Self {
        Self {
            start: clamp_seconds(self.start, total),
            end: clamp_seconds(self.end, total),
        }
    }

    /// True when both endpoints are finite and `start < end`.
    #[inline]
    pub fn is_well_formed(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ~ {}",
            format_timestamp(self.start),
            format_timestamp(self.end)
        )
    }
}
