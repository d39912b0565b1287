use trellis_engine::coords::Rect;

use crate::painter::Painter;
use crate::theme::Theme;

/// Capabilities every widget kind shares: a rectangle and a paint routine.
///
/// Hit-testing and mutation entry points differ per kind and live on the
/// concrete types; the frame driver calls them in its fixed priority order.
pub trait Widget {
    /// Geometry from the last layout pass (or the popup anchor for widgets
    /// that are not part of the layout tree).
    fn bounds(&self) -> Rect;

    /// Receives the rectangle the layout engine computed for this widget's node.
    ///
    /// Widgets outside the layout tree keep the default no-op.
    fn set_bounds(&mut self, _bounds: Rect) {}

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme);
}
