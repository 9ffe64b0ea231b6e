//! Highlight Core - Foundation types for the segment editor
//!
//! This crate provides the fundamental types used throughout Highlight Studio:
//! - Time intervals in seconds and the strict intersection test
//! - `MM:SS` timestamp formatting
//! - The shared error type

pub mod error;
pub mod time;

pub use error::{HighlightError, Result};
pub use time::{clamp_seconds, format_timestamp, Interval};
