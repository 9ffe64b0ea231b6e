//! Error taxonomy for the segment editor.

use highlight_core::format_timestamp;
use thiserror::Error;

use crate::notify::Severity;

fn ts(seconds: &f64) -> String {
    format_timestamp(*seconds)
}

/// Errors raised by editor commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// A mutation was attempted outside of an edit session.
    #[error("Not in edit mode")]
    NotEditing,

    /// A save is already in flight.
    #[error("A save is already in progress")]
    SaveInProgress,

    /// The timeline has no duration to place segments on.
    #[error("Source duration is unknown")]
    NoDuration,

    /// Segment index does not exist.
    #[error("Segment {index} does not exist (timeline has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Saving requires at least one segment.
    #[error("At least one segment is required")]
    EmptyTimeline,

    /// A segment ends at or before its start.
    #[error("Invalid segment: end {} is not after start {}", ts(.end), ts(.start))]
    InvertedInterval { start: f64, end: f64 },

    /// Two adjacent segments overlap.
    #[error(
        "Segments overlap: previous ends at {} but next starts at {}",
        ts(.prev_end),
        ts(.next_start)
    )]
    OverlappingInterval { prev_end: f64, next_start: f64 },

    /// A new segment would intersect an existing one.
    #[error("Cannot add segment {} ~ {}: it overlaps an existing segment", ts(.start), ts(.end))]
    PlacementOverlap { start: f64, end: f64 },

    /// A new segment would be shorter than the minimum duration.
    #[error("Segment too short to add ({duration:.2}s)")]
    SegmentTooShort { duration: f64 },

    /// The persistence collaborator rejected the save or was unreachable.
    #[error("Failed to save changes: {message}")]
    Persistence { message: String },

    /// A required collaborator was not supplied at initialization.
    #[error("Editor cannot start: missing {0}")]
    MissingContext(&'static str),
}

impl EditError {
    /// Notification severity for this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::InvertedInterval { .. } | Self::Persistence { .. } | Self::MissingContext(_) => {
                Severity::Error
            }
            Self::NotEditing | Self::SaveInProgress => Severity::Info,
            _ => Severity::Warning,
        }
    }

    /// True for failures detected locally before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTimeline
                | Self::InvertedInterval { .. }
                | Self::OverlappingInterval { .. }
                | Self::PlacementOverlap { .. }
                | Self::SegmentTooShort { .. }
        )
    }
}

/// Result type alias for editor commands.
pub type EditResult<T> = std::result::Result<T, EditError>;
