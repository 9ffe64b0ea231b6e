//! Toast rendering for editor notices.

use egui::{Align2, Color32, Id, RichText, Vec2};
use highlight_timeline::Notice;

use crate::theme::Theme;

/// How long a toast stays on screen, in seconds.
const TOAST_LIFETIME: f64 = 3.5;
/// Fade-out at the end of the lifetime, in seconds.
const TOAST_FADE: f64 = 0.4;
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone)]
struct Toast {
    notice: Notice,
    shown_at: f64,
}

/// Stack of transient notices in the bottom-right corner.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `notice`, shown from time `now` (egui input time).
    pub fn push(&mut self, notice: Notice, now: f64) {
        self.items.push(Toast {
            notice,
            shown_at: now,
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
    }

    pub fn extend(&mut self, notices: impl IntoIterator<Item = Notice>, now: f64) {
        for notice in notices {
            self.push(notice, now);
        }
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: f64) {
        self.items.retain(|t| now - t.shown_at < TOAST_LIFETIME);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw the stack and keep repainting while anything is visible.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.prune(now);
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(Id::new("highlight_toasts"))
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-Theme::SPACE_MD, -Theme::SPACE_MD))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.items {
                    let alpha = fade(now - toast.shown_at);
                    ui.set_opacity(alpha);
                    Theme::glass_frame().show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let accent = Theme::severity(toast.notice.severity);
                            ui.label(RichText::new("\u{25CF}").color(accent));
                            ui.label(
                                RichText::new(&toast.notice.message)
                                    .size(Theme::FONT_SM)
                                    .color(Color32::WHITE),
                            );
                        });
                    });
                    ui.add_space(Theme::SPACE_XS);
                }
            });

        ctx.request_repaint_after(std::time::Duration::from_millis(50));
    }
}

/// Opacity of a toast that has been visible for `age` seconds.
fn fade(age: f64) -> f32 {
    let remaining = TOAST_LIFETIME - age;
    if remaining >= TOAST_FADE {
        1.0
    } else {
        (remaining / TOAST_FADE).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highlight_timeline::Severity;

    #[test]
    fn test_prune_expired() {
        let mut toasts = Toasts::new();
        toasts.push(Notice::new("saved", Severity::Success), 0.0);
        toasts.push(Notice::new("later", Severity::Info), 2.0);
        toasts.prune(4.0);
        assert_eq!(toasts.len(), 1);
        toasts.prune(10.0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_stack_is_bounded() {
        let mut toasts = Toasts::new();
        toasts.extend(
            (0..10).map(|i| Notice::new(format!("n{i}"), Severity::Info)),
            0.0,
        );
        assert_eq!(toasts.len(), MAX_VISIBLE);
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade(0.0), 1.0);
        assert!(fade(TOAST_LIFETIME - TOAST_FADE / 2.0) < 1.0);
        assert_eq!(fade(TOAST_LIFETIME + 1.0), 0.0);
    }
}
