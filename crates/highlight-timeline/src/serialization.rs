//! Segment result files produced by the highlight pipeline.
//!
//! Shape: `{ "segments": [{start_time, end_time, score}], "original_duration": f64 }`.

use highlight_core::{HighlightError, Result};
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Pipeline result for one source video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentsFile {
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Source duration in seconds, when the pipeline recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_duration: Option<f64>,
}

impl SegmentsFile {
    pub fn new(segments: Vec<Segment>, original_duration: f64) -> Self {
        Self {
            segments,
            original_duration: Some(original_duration),
        }
    }

    /// No segments and no known duration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Recorded duration, or `fallback` when missing or non-positive.
    pub fn duration_or(&self, fallback: f64) -> f64 {
        match self.original_duration {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => fallback,
        }
    }

    /// Serialize to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| {
            HighlightError::Serialization(format!("Failed to serialize segments: {}", e))
        })
    }

    /// Deserialize from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| HighlightError::Serialization(format!("Invalid segments file: {}", e)))
    }

    /// Save to a file path.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let data = self.to_json()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pipeline_output() {
        let json = br#"{
            "segments": [
                {"start_time": 12.0, "end_time": 18.5, "score": 0.82},
                {"start_time": 40.0, "end_time": 44.0, "score": 0.61}
            ],
            "original_duration": 312.4
        }"#;
        let file = SegmentsFile::from_json(json).unwrap();
        assert_eq!(file.segments.len(), 2);
        assert_eq!(file.duration_or(0.0), 312.4);
    }

    #[test]
    fn test_missing_fields_default() {
        let file = SegmentsFile::from_json(b"{}").unwrap();
        assert!(file.segments.is_empty());
        assert_eq!(file.duration_or(95.0), 95.0);
    }

    #[test]
    fn test_zero_duration_uses_fallback() {
        let file = SegmentsFile::new(Vec::new(), 0.0);
        assert_eq!(file.duration_or(42.0), 42.0);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(SegmentsFile::from_json(b"{ not json").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("segments-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("talk.json");

        let file = SegmentsFile::new(vec![Segment::new(1.0, 3.0, 0.4)], 10.0);
        file.save_to_file(&path).unwrap();
        let loaded = SegmentsFile::load_from_file(&path).unwrap();
        assert_eq!(loaded, file);

        std::fs::remove_dir_all(&dir).ok();
    }
}
