use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle payload. `thickness` is ignored for fills.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn push_fill_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::FillCircle(CircleCmd { center, radius, thickness: 0.0, color }));
    }

    /// Records a circle outline.
    #[inline]
    pub fn push_stroke_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        thickness: f32,
        color: Color,
    ) {
        self.push(z, DrawCmd::StrokeCircle(CircleCmd { center, radius, thickness, color }));
    }
}
