//! Editor tunables.

use highlight_core::{HighlightError, Result};
use serde::{Deserialize, Serialize};

/// Tunable constants for segment editing.
///
/// The new-segment heuristic is `clamp(min(max, total * fraction), floor, inf)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Smallest segment a resize or add may produce, in seconds (default: 0.1).
    pub min_segment_duration: f64,
    /// Upper bound for a newly added segment, in seconds (default: 5.0).
    pub new_segment_max: f64,
    /// Fraction of the source duration used for a new segment (default: 0.10).
    pub new_segment_fraction: f64,
    /// Lower bound for a newly added segment, in seconds (default: 0.2).
    pub new_segment_floor: f64,
    /// Shrinkage tolerated before a clamped new segment is re-anchored (default: 0.05).
    pub reanchor_tolerance: f64,
    /// Score assigned to user-added segments (default: 0.5).
    pub default_score: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_segment_duration: 0.1,
            new_segment_max: 5.0,
            new_segment_fraction: 0.10,
            new_segment_floor: 0.2,
            reanchor_tolerance: 0.05,
            default_score: 0.5,
        }
    }
}

impl EditorConfig {
    /// Desired duration of a segment added by clicking on the timeline.
    pub fn new_segment_duration(&self, total_duration: f64) -> f64 {
        self.new_segment_max
            .min(total_duration * self.new_segment_fraction)
            .max(self.new_segment_floor)
    }

    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| HighlightError::Serialization(format!("Invalid editor config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load overrides from a JSON file.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Reject values that would break the timeline invariants.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("min_segment_duration", self.min_segment_duration),
            ("new_segment_max", self.new_segment_max),
            ("new_segment_fraction", self.new_segment_fraction),
            ("new_segment_floor", self.new_segment_floor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HighlightError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.reanchor_tolerance.is_finite() || self.reanchor_tolerance < 0.0 {
            return Err(HighlightError::InvalidParameter(format!(
                "reanchor_tolerance must be non-negative, got {}",
                self.reanchor_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_segment_duration() {
        let config = EditorConfig::default();
        assert_eq!(config.new_segment_duration(60.0), 5.0);
        assert!((config.new_segment_duration(20.0) - 2.0).abs() < 1e-9);
        assert_eq!(config.new_segment_duration(1.0), 0.2);
    }

    #[test]
    fn test_partial_override() {
        let config = EditorConfig::from_json(br#"{ "new_segment_max": 8.0 }"#).unwrap();
        assert_eq!(config.new_segment_max, 8.0);
        assert_eq!(config.min_segment_duration, 0.1);
    }

    #[test]
    fn test_rejects_non_positive_minimum() {
        let result = EditorConfig::from_json(br#"{ "min_segment_duration": 0.0 }"#);
        assert!(result.is_err());
    }
}
