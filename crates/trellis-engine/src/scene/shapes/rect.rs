use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Rectangle outline payload. The stroke is drawn inside `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub thickness: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn push_fill_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::FillRect(RectCmd { rect, color }));
    }

    /// Records a rectangle outline of `thickness` logical pixels.
    #[inline]
    pub fn push_stroke_rect(&mut self, z: ZIndex, rect: Rect, thickness: f32, color: Color) {
        self.push(z, DrawCmd::StrokeRect(StrokeRectCmd { rect, thickness, color }));
    }
}
