//! Highlight UI - egui widgets for highlight editing
//!
//! Provides UI components:
//! - Highlight bar (segment blocks, resize handles, drag ghost)
//! - Toast notifications
//! - Theme

pub mod handles;
pub mod highlight_bar;
pub mod theme;
pub mod toast;

pub use handles::{handle_zone, hit_test, hit_test_handle, BarHit};
pub use highlight_bar::{BarEvent, HighlightBar};
pub use theme::Theme;
pub use toast::Toasts;
