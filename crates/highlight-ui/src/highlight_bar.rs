//! Highlight bar: segment blocks over the source duration, time markers,
//! resize handles, drag ghost, click-to-add and delete confirmation.

use egui::{self, Align2, CursorIcon, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};
use highlight_core::Interval;
use highlight_timeline::layout::percent_to_seconds;
use highlight_timeline::{HighlightEditor, Interaction, Segment};
use tracing::debug;

use crate::handles::{handle_cursor, handle_zone, hit_test, BarHit};
use crate::theme::Theme;

const MARKER_HEIGHT: f32 = 18.0;
const MIN_BLOCK_WIDTH: f32 = 2.0;

// ── Events ─────────────────────────────────────────────────────

/// Completed user actions, for the host to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum BarEvent {
    Added(usize),
    Deleted(Segment),
    DragFinished(Interaction),
}

// ── State ──────────────────────────────────────────────────────

/// Persistent widget state between frames.
#[derive(Debug, Clone)]
pub struct HighlightBar {
    /// Height of the segment track in points.
    pub height: f32,
    /// Width of the grab zone at each block edge.
    pub handle_width: f32,
    /// Segment awaiting delete confirmation. Held by value so index shifts
    /// cannot retarget the dialog.
    pending_delete: Option<Segment>,
    /// Pointer x where the active drag started.
    drag_origin_x: Option<f32>,
}

impl Default for HighlightBar {
    fn default() -> Self {
        Self {
            height: 36.0,
            handle_width: 6.0,
            pending_delete: None,
            drag_origin_x: None,
        }
    }
}

impl HighlightBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<Segment> {
        self.pending_delete
    }

    // ── Rendering ──────────────────────────────────────────────

    pub fn show(&mut self, ui: &mut egui::Ui, editor: &mut HighlightEditor) -> Vec<BarEvent> {
        let mut events = Vec::new();
        let editing = editor.is_editing() && !editor.is_saving();
        if !editing {
            self.pending_delete = None;
        }
        // The bar is inert while the delete dialog is open
        let interactive = editing && self.pending_delete.is_none();

        let sense = if interactive {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        let size = Vec2::new(ui.available_width(), self.height + MARKER_HEIGHT);
        let (response, painter) = ui.allocate_painter(size, sense);
        let rect = response.rect;
        let bar = Rect::from_min_size(rect.min, Vec2::new(rect.width(), self.height));
        let total = editor.timeline().total_duration();

        painter.rect_filled(bar, Rounding::same(Theme::RADIUS), Theme::bg());
        painter.rect_stroke(
            bar,
            Rounding::same(Theme::RADIUS),
            Stroke::new(Theme::STROKE_SUBTLE, Theme::white_10()),
        );

        let layout = editor.layout();

        // Markers
        for marker in &layout.markers {
            let x = bar.left() + marker.left_percent as f32 / 100.0 * bar.width();
            painter.line_segment(
                [Pos2::new(x, bar.bottom()), Pos2::new(x, bar.bottom() + 4.0)],
                Stroke::new(1.0, Theme::t3()),
            );
            let align = if marker.left_percent <= 0.0 {
                Align2::LEFT_TOP
            } else if marker.left_percent >= 100.0 {
                Align2::RIGHT_TOP
            } else {
                Align2::CENTER_TOP
            };
            painter.text(
                Pos2::new(x, bar.bottom() + 5.0),
                align,
                &marker.label,
                FontId::proportional(Theme::FONT_XS),
                Theme::t2(),
            );
        }

        // Empty state
        if layout.blocks.is_empty() {
            let hint = if total <= 0.0 {
                "No highlight loaded"
            } else if editing {
                "Click the bar to add a segment"
            } else {
                "No segments"
            };
            painter.text(
                bar.center(),
                Align2::CENTER_CENTER,
                hint,
                FontId::proportional(Theme::FONT_XS),
                Theme::t3(),
            );
        }

        // Blocks
        let moving = match editor.interaction() {
            Some(Interaction::Move(drag)) => Some(drag.index),
            _ => None,
        };
        let fill = if editor.is_editing() {
            Theme::segment_editing()
        } else {
            Theme::segment()
        };
        let mut rects: Vec<(usize, Rect)> = Vec::with_capacity(layout.blocks.len());
        for block in &layout.blocks {
            let left = bar.left() + block.left_percent as f32 / 100.0 * bar.width();
            let width = block.width_percent as f32 / 100.0 * bar.width();
            let block_rect =
                Rect::from_min_size(Pos2::new(left, bar.top() + 3.0), Vec2::new(width, bar.height() - 6.0));
            // Hits use the real geometry, only the painted block is widened
            rects.push((block.index, block_rect));
            let painted = Rect::from_min_size(
                block_rect.min,
                Vec2::new(width.max(MIN_BLOCK_WIDTH), block_rect.height()),
            );

            let alpha = if moving == Some(block.index) { 60 } else { 170 };
            painter.rect_filled(
                painted,
                Rounding::same(Theme::RADIUS),
                Theme::with_alpha(fill, alpha),
            );

            if editor.is_editing() {
                let hw = handle_zone(width, self.handle_width);
                for handle in [
                    Rect::from_min_size(block_rect.min, Vec2::new(hw, block_rect.height())),
                    Rect::from_min_size(
                        Pos2::new(block_rect.right() - hw, block_rect.top()),
                        Vec2::new(hw, block_rect.height()),
                    ),
                ] {
                    painter.rect_filled(handle, Rounding::same(Theme::RADIUS), fill);
                }
            }
        }

        // Ghost
        if let Some(ghost) = editor.ghost() {
            self.draw_ghost(&painter, bar, ghost, total);
        }

        if interactive {
            self.handle_pointer(ui, &response, editor, bar, &rects, total, &mut events);
        }

        // Cursor and tooltip
        let hovered = response
            .hover_pos()
            .map(|pos| hit_test(&rects, pos, self.handle_width))
            .unwrap_or(BarHit::Empty);
        match editor.interaction() {
            Some(Interaction::Resize(drag)) => ui.ctx().set_cursor_icon(handle_cursor(drag.edge)),
            Some(Interaction::Move(_)) => ui.ctx().set_cursor_icon(CursorIcon::Grabbing),
            None if interactive && response.hovered() => ui.ctx().set_cursor_icon(hovered.cursor()),
            None => {}
        }
        if editor.interaction().is_none() {
            if let BarHit::Body(index) | BarHit::Handle(index, _) = hovered {
                if let Some(segment) = editor.timeline().get(index) {
                    let label = segment.label();
                    response.on_hover_text(label);
                }
            }
        }

        self.confirm_delete(ui.ctx(), editor, &mut events);
        events
    }

    fn draw_ghost(&self, painter: &egui::Painter, bar: Rect, ghost: Interval, total: f64) {
        if total <= 0.0 {
            return;
        }
        let left = bar.left() + (ghost.start / total) as f32 * bar.width();
        let width = ((ghost.duration() / total) as f32 * bar.width()).max(MIN_BLOCK_WIDTH);
        let ghost_rect =
            Rect::from_min_size(Pos2::new(left, bar.top() + 1.0), Vec2::new(width, bar.height() - 2.0));
        painter.rect_stroke(
            ghost_rect,
            Rounding::same(Theme::RADIUS),
            Stroke::new(1.5, Theme::t1()),
        );
        painter.text(
            Pos2::new(ghost_rect.center().x, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            ghost.to_string(),
            FontId::proportional(Theme::FONT_XS),
            Theme::t1(),
        );
    }

    // ── Interaction ────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    fn handle_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        editor: &mut HighlightEditor,
        bar: Rect,
        rects: &[(usize, Rect)],
        total: f64,
        events: &mut Vec<BarEvent>,
    ) {
        // Click: add on empty space, confirm delete on a block
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                match hit_test(rects, pos, self.handle_width) {
                    BarHit::Empty if bar.contains(pos) => {
                        let at = seconds_at(pos.x, bar, total);
                        if let Ok(index) = editor.add_segment_at(at) {
                            events.push(BarEvent::Added(index));
                        }
                    }
                    BarHit::Body(index) | BarHit::Handle(index, _) => {
                        self.pending_delete = editor.timeline().get(index).copied();
                    }
                    BarHit::Empty => {}
                }
            }
        }

        // Drag start
        if response.drag_started() {
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(origin) = origin {
                let started = match hit_test(rects, origin, self.handle_width) {
                    BarHit::Handle(index, edge) => editor.begin_resize(index, edge).is_ok(),
                    BarHit::Body(index) => editor.begin_move(index).is_ok(),
                    BarHit::Empty => false,
                };
                if started {
                    self.drag_origin_x = Some(origin.x);
                }
            }
        }

        // Drag update
        if response.dragged() {
            if let (Some(origin_x), Some(pos)) =
                (self.drag_origin_x, response.interact_pointer_pos())
            {
                let delta = f64::from(pos.x - origin_x) / f64::from(bar.width()) * total;
                editor.update_drag(delta);
            }
        }

        // Release, including a release outside the widget or window
        let released = response.drag_stopped()
            || (editor.interaction().is_some() && !ui.input(|i| i.pointer.any_down()));
        if released {
            self.drag_origin_x = None;
            if let Some(done) = editor.end_drag() {
                debug!(index = done.index(), "Drag finished");
                events.push(BarEvent::DragFinished(done));
            }
        }
    }

    fn confirm_delete(
        &mut self,
        ctx: &egui::Context,
        editor: &mut HighlightEditor,
        events: &mut Vec<BarEvent>,
    ) {
        let Some(pending) = self.pending_delete else {
            return;
        };

        let mut decision = None;
        egui::Window::new("Delete segment")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .frame(Theme::glass_frame())
            .show(ctx, |ui| {
                ui.label(format!("Delete segment {}?", pending.label()));
                ui.add_space(Theme::SPACE_SM);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        decision = Some(true);
                    }
                    if ui.button("Keep").clicked() {
                        decision = Some(false);
                    }
                });
            });

        if let Some(confirmed) = decision {
            if let Some(removed) = self.resolve_delete(editor, confirmed) {
                events.push(BarEvent::Deleted(removed));
            }
        }
    }

    /// Close the delete dialog. On confirm, removes the pending segment at
    /// whatever index it currently has.
    fn resolve_delete(&mut self, editor: &mut HighlightEditor, confirmed: bool) -> Option<Segment> {
        let pending = self.pending_delete.take()?;
        if !confirmed {
            return None;
        }
        let Some(index) = editor.segments().iter().position(|s| *s == pending) else {
            debug!(segment = %pending.label(), "Segment to delete is gone");
            return None;
        };
        editor.delete_segment(index).ok()
    }
}

/// Seconds under horizontal position `x` on `bar`.
fn seconds_at(x: f32, bar: Rect, total: f64) -> f64 {
    if bar.width() <= 0.0 {
        return 0.0;
    }
    let percent = f64::from(((x - bar.left()) / bar.width()).clamp(0.0, 1.0)) * 100.0;
    percent_to_seconds(percent, total)
}
