//! Pre-save validation.

use crate::error::{EditError, EditResult};
use crate::timeline::Timeline;

/// Check the timeline before it is handed to the persistence collaborator.
///
/// Runs in order: non-empty, re-sort, every segment ends after it starts,
/// adjacent segments do not overlap. The first failure is returned.
pub fn validate_for_save(timeline: &mut Timeline) -> EditResult<()> {
    if timeline.is_empty() {
        return Err(EditError::EmptyTimeline);
    }

    timeline.resort();

    if let Some(seg) = timeline
        .segments()
        .iter()
        .find(|s| !s.interval().is_well_formed())
    {
        return Err(EditError::InvertedInterval {
            start: seg.start,
            end: seg.end,
        });
    }

    if let Some(pair) = timeline
        .segments()
        .windows(2)
        .find(|w| w[1].start < w[0].end)
    {
        return Err(EditError::OverlappingInterval {
            prev_end: pair[0].end,
            next_start: pair[1].start,
        });
    }

    Ok(())
}
