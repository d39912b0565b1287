use trellis_engine::coords::Rect;
use trellis_engine::paint::Color;

use crate::handle::Handle;
use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;
use crate::widgets::context_menu::ContextMenu;

/// Container that paints a background and holds other widgets.
///
/// Without an explicit background the theme's default fill is used.
#[derive(Debug, Default)]
pub struct Panel {
    bounds: Rect,
    background: Option<Color>,
    context_menu: Option<Handle<ContextMenu>>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    /// Sets the background from `#RGB` / `#RRGGBB`.
    ///
    /// Returns `false` and keeps the current background when `hex` is malformed.
    pub fn set_background_hex(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(c) => {
                self.background = Some(c);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    /// Context menu opened by a right-click inside this panel.
    #[inline]
    pub fn context_menu(&self) -> Option<Handle<ContextMenu>> {
        self.context_menu
    }

    pub(crate) fn set_context_menu(&mut self, menu: Handle<ContextMenu>) {
        self.context_menu = Some(menu);
    }
}

impl Widget for Panel {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let fill = self.background.unwrap_or(theme.panel.default_fill);
        painter.fill_rect(self.bounds, fill);
        painter.stroke_rect(self.bounds, 1.0, theme.panel.stroke);
    }
}
