use trellis_engine::coords::Rect;

use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

/// Clickable control with a centered label.
///
/// # Example
/// ```rust,ignore
/// Button::new("Save").on_click(|| log::info!("saved"))
/// ```
pub struct Button {
    bounds: Rect,
    label: String,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self { bounds: Rect::ZERO, label: label.into(), on_click: None }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn set_on_click(&mut self, f: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(f));
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    #[inline]
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.bounds.contains((x, y).into())
    }

    /// Fires the click callback, if any.
    pub fn click(&mut self) {
        log::debug!("button {:?} clicked", self.label);
        if let Some(f) = &mut self.on_click {
            f();
        }
    }
}

impl Widget for Button {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let b = self.bounds;
        painter.fill_rect(b, theme.button.fill);
        painter.stroke_rect(b, 1.0, theme.button.stroke);

        let tx = b.x + (b.w - painter.text_width(&self.label)) / 2.0;
        painter.text_v_centered(&self.label, tx, b.y, b.h, theme.button.text);
    }
}
