//! Highlight Client - HTTP persistence for edited segments
//!
//! Implements [`highlight_timeline::SegmentStore`] against the highlight
//! server and fetches pipeline results for loading.

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpSegmentStore;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
