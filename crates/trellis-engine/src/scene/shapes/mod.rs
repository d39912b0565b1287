mod circle;
mod line;
mod rect;
mod text;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use rect::{RectCmd, StrokeRectCmd};
pub use text::TextCmd;
