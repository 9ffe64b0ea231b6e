//! Pointer hit testing for segment blocks and their resize handles.

use egui::{CursorIcon, Pos2, Rect, Vec2};
use highlight_timeline::ResizeEdge;

/// What the pointer is over on the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHit {
    /// Resize handle of the block for segment `index`.
    Handle(usize, ResizeEdge),
    /// Body of the block for segment `index`.
    Body(usize),
    Empty,
}

impl BarHit {
    /// Cursor shown while hovering this target in edit mode.
    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::Handle(_, edge) => handle_cursor(edge),
            Self::Body(_) => CursorIcon::Grab,
            Self::Empty => CursorIcon::Crosshair,
        }
    }
}

/// Width of each resize handle on a block `block_width` wide.
///
/// Handles never take more than a quarter of the block each, so every block
/// keeps a body to grab for moving.
pub fn handle_zone(block_width: f32, handle_width: f32) -> f32 {
    handle_width.min(block_width / 4.0).max(0.0)
}

/// Hit test a position against a block's resize handles.
///
/// Returns `Some(ResizeEdge)` if the position is over a handle.
pub fn hit_test_handle(block: Rect, pos: Pos2, handle_width: f32) -> Option<ResizeEdge> {
    if !block.contains(pos) {
        return None;
    }
    let zone = handle_zone(block.width(), handle_width);

    let left = Rect::from_min_size(block.min, Vec2::new(zone, block.height()));
    if left.contains(pos) {
        return Some(ResizeEdge::Left);
    }
    let right = Rect::from_min_size(
        Pos2::new(block.right() - zone, block.top()),
        Vec2::new(zone, block.height()),
    );
    if right.contains(pos) {
        return Some(ResizeEdge::Right);
    }
    None
}

/// Resolve the topmost target under `pos`. Later blocks win ties.
pub fn hit_test(blocks: &[(usize, Rect)], pos: Pos2, handle_width: f32) -> BarHit {
    for &(index, rect) in blocks.iter().rev() {
        if let Some(edge) = hit_test_handle(rect, pos, handle_width) {
            return BarHit::Handle(index, edge);
        }
        if rect.contains(pos) {
            return BarHit::Body(index);
        }
    }
    BarHit::Empty
}

pub fn handle_cursor(edge: ResizeEdge) -> CursorIcon {
    match edge {
        ResizeEdge::Left => CursorIcon::ResizeWest,
        ResizeEdge::Right => CursorIcon::ResizeEast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(200.0, 30.0))
    }

    #[test]
    fn test_hit_left_handle() {
        assert_eq!(
            hit_test_handle(block(), Pos2::new(102.0, 65.0), 6.0),
            Some(ResizeEdge::Left)
        );
    }

    #[test]
    fn test_hit_right_handle() {
        assert_eq!(
            hit_test_handle(block(), Pos2::new(298.0, 65.0), 6.0),
            Some(ResizeEdge::Right)
        );
    }

    #[test]
    fn test_body_and_outside() {
        assert!(hit_test_handle(block(), Pos2::new(200.0, 65.0), 6.0).is_none());
        assert!(hit_test_handle(block(), Pos2::new(50.0, 65.0), 6.0).is_none());
    }

    #[test]
    fn test_narrow_block_keeps_body() {
        // A few seconds of a long source: narrower than two full handles
        let narrow = Rect::from_min_size(Pos2::new(100.0, 0.0), Vec2::new(6.7, 30.0));
        assert_eq!(
            hit_test_handle(narrow, Pos2::new(100.5, 10.0), 6.0),
            Some(ResizeEdge::Left)
        );
        assert_eq!(
            hit_test_handle(narrow, Pos2::new(106.5, 10.0), 6.0),
            Some(ResizeEdge::Right)
        );
        let blocks = [(0, narrow)];
        assert_eq!(hit_test(&blocks, Pos2::new(103.3, 10.0), 6.0), BarHit::Body(0));
        let bodies = (2..=5)
            .map(|dx| hit_test(&blocks, Pos2::new(100.0 + dx as f32, 10.0), 6.0))
            .filter(|hit| matches!(hit, BarHit::Body(0)))
            .count();
        assert!(bodies >= 2);
    }

    #[test]
    fn test_handle_zone() {
        assert_eq!(handle_zone(200.0, 6.0), 6.0);
        assert_eq!(handle_zone(8.0, 6.0), 2.0);
        assert_eq!(handle_zone(0.0, 6.0), 0.0);
    }

    #[test]
    fn test_hit_test_blocks() {
        let blocks = [
            (0, Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(50.0, 30.0))),
            (1, Rect::from_min_size(Pos2::new(80.0, 0.0), Vec2::new(50.0, 30.0))),
        ];
        assert_eq!(hit_test(&blocks, Pos2::new(100.0, 10.0), 6.0), BarHit::Body(1));
        assert_eq!(
            hit_test(&blocks, Pos2::new(48.0, 10.0), 6.0),
            BarHit::Handle(0, ResizeEdge::Right)
        );
        assert_eq!(hit_test(&blocks, Pos2::new(65.0, 10.0), 6.0), BarHit::Empty);
    }

    #[test]
    fn test_cursors() {
        assert_eq!(BarHit::Empty.cursor(), CursorIcon::Crosshair);
        assert_eq!(BarHit::Body(0).cursor(), CursorIcon::Grab);
        assert_eq!(
            BarHit::Handle(0, ResizeEdge::Left).cursor(),
            CursorIcon::ResizeWest
        );
    }
}
