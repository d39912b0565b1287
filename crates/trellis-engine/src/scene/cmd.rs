use crate::scene::shapes::{CircleCmd, LineCmd, RectCmd, StrokeRectCmd, TextCmd};

/// Backend-agnostic draw command stream.
///
/// This is the whole paint vocabulary the UI needs. Whatever presents the
/// frame (GPU, software rasterizer, test assertions) walks these in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect(RectCmd),
    StrokeRect(StrokeRectCmd),
    FillCircle(CircleCmd),
    StrokeCircle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}
