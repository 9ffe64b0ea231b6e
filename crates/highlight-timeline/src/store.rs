//! Persistence seam for saving edited segments.

use std::future::Future;

use highlight_core::Result;
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Body of the update call: the source file and its final segment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub filename: String,
    pub segments: Vec<Segment>,
}

/// Success response of the update call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveAck {
    /// New playable highlight, when the server re-rendered it.
    #[serde(default, alias = "video_url", alias = "url")]
    pub media_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// External collaborator that persists a segment list.
///
/// Implementations return `HighlightError::Persistence` carrying a
/// human-readable message on rejection or transport failure.
pub trait SegmentStore {
    fn update_highlights(
        &self,
        request: &SaveRequest,
    ) -> impl Future<Output = Result<SaveAck>> + Send;
}
