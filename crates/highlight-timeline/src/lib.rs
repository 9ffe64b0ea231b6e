//! Highlight Timeline - Segment editing model
//!
//! Implements the highlight segment editor independent of any UI toolkit:
//! - Ordered, non-overlapping segments over a fixed source duration
//! - Edit geometry for add, resize and move with neighbor clamping
//! - View/Edit session with backup and restore
//! - Save validation and the persistence seam
//! - Pure layout projection for any front end

pub mod config;
pub mod edit;
pub mod editor;
pub mod error;
pub mod layout;
pub mod notify;
pub mod segment;
pub mod serialization;
pub mod session;
pub mod store;
pub mod timeline;
pub mod validation;

pub use config::EditorConfig;
pub use edit::{Interaction, MoveDrag, ResizeDrag, ResizeEdge};
pub use editor::{EditorContext, HighlightEditor, HighlightEditorBuilder};
pub use error::{EditError, EditResult};
pub use layout::{BarLayout, BlockLayout, TimeMarker};
pub use notify::{Notice, NoticeQueue, Notifier, Severity, TracingNotifier};
pub use segment::Segment;
pub use serialization::SegmentsFile;
pub use session::{EditMode, EditSession};
pub use store::{SaveAck, SaveRequest, SegmentStore};
pub use timeline::Timeline;
