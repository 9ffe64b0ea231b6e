//! Dark theme for the highlight editor.

use egui::{Color32, Rounding, Stroke, Vec2};
use highlight_timeline::Severity;

/// Central theme: sizes, palette, frames.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_XS: f32 = 11.0; // markers, tooltips
    pub const FONT_SM: f32 = 13.0; // body, buttons

    // ── Spacing (4px base) ─────────────────────────────────────
    pub const SPACE_XS: f32 = 4.0;
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;

    // ── Border radius ──────────────────────────────────────────
    pub const RADIUS: f32 = 4.0;
    pub const RADIUS_LG: f32 = 10.0;

    pub const STROKE_SUBTLE: f32 = 0.5;
    pub const STROKE_EMPHASIS: f32 = 1.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(18, 18, 22)
    }
    pub const fn bg1() -> Color32 {
        Color32::from_rgb(28, 28, 34)
    }
    pub const fn bg2() -> Color32 {
        Color32::from_rgb(35, 35, 42)
    }
    pub const fn bg3() -> Color32 {
        Color32::from_rgb(45, 45, 55)
    }

    // ── Text ───────────────────────────────────────────────────
    pub const fn t1() -> Color32 {
        Color32::from_rgba_premultiplied(235, 235, 235, 235)
    }
    pub const fn t2() -> Color32 {
        Color32::from_rgba_premultiplied(153, 153, 153, 153)
    }
    pub const fn t3() -> Color32 {
        Color32::from_rgba_premultiplied(89, 89, 89, 89)
    }

    // ── Accent ─────────────────────────────────────────────────
    pub const fn accent() -> Color32 {
        Color32::from_rgb(86, 130, 255)
    }
    pub const fn white_10() -> Color32 {
        Color32::from_rgba_premultiplied(26, 26, 26, 26)
    }

    // ── Semantic colors ────────────────────────────────────────
    pub const fn red() -> Color32 {
        Color32::from_rgb(255, 88, 85)
    }
    pub const fn green() -> Color32 {
        Color32::from_rgb(48, 213, 160)
    }
    pub const fn amber() -> Color32 {
        Color32::from_rgb(255, 184, 48)
    }
    pub const fn cyan() -> Color32 {
        Color32::from_rgb(34, 211, 238)
    }

    /// Segment block fill in view mode.
    pub const fn segment() -> Color32 {
        Self::accent()
    }
    /// Segment block fill in edit mode.
    pub const fn segment_editing() -> Color32 {
        Self::amber()
    }

    /// Toast accent for a notice severity.
    pub const fn severity(severity: Severity) -> Color32 {
        match severity {
            Severity::Info => Self::cyan(),
            Severity::Success => Self::green(),
            Severity::Warning => Self::amber(),
            Severity::Error => Self::red(),
        }
    }

    /// Return a color with replaced alpha.
    pub const fn with_alpha(c: Color32, a: u8) -> Color32 {
        Color32::from_rgba_premultiplied(
            (c.r() as u16 * a as u16 / 255) as u8,
            (c.g() as u16 * a as u16 / 255) as u8,
            (c.b() as u16 * a as u16 / 255) as u8,
            a,
        )
    }

    // ── Frames ─────────────────────────────────────────────────

    pub fn panel_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::bg1())
            .inner_margin(egui::Margin::same(Self::SPACE_MD))
    }

    /// Floating frame for toasts and dialogs.
    pub fn glass_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Color32::from_rgba_premultiplied(8, 8, 14, 220))
            .stroke(Stroke::new(Self::STROKE_SUBTLE, Self::white_10()))
            .rounding(Rounding::same(Self::RADIUS_LG))
            .inner_margin(egui::Margin::symmetric(14.0, 10.0))
            .shadow(egui::epaint::Shadow {
                offset: Vec2::new(0.0, 6.0),
                blur: 24.0,
                spread: 0.0,
                color: Color32::from_rgba_premultiplied(0, 0, 0, 100),
            })
    }

    /// Apply the theme to an egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();

        visuals.panel_fill = Self::bg1();
        visuals.window_fill = Self::bg2();
        visuals.extreme_bg_color = Self::bg();

        visuals.widgets.inactive.bg_fill = Self::bg3();
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::t2());
        visuals.widgets.inactive.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::t1());
        visuals.widgets.hovered.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.active.fg_stroke = Stroke::new(Self::STROKE_EMPHASIS, Self::accent());
        visuals.widgets.active.rounding = Rounding::same(Self::RADIUS);

        visuals.selection.stroke = Stroke::new(1.0, Self::accent());
        visuals.window_rounding = Rounding::same(Self::RADIUS_LG);

        style.interaction.tooltip_delay = 0.2;
        ctx.set_style(style);
    }
}
