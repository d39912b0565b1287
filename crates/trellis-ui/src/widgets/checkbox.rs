use trellis_engine::coords::Rect;

use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

const BOX_SIZE: f32 = 16.0;
const CHECK_INSET: f32 = 3.0;
const LABEL_GAP: f32 = 8.0;

/// Toggleable box with a label to its right.
///
/// # Example
/// ```rust,ignore
/// Checkbox::new("Enable sound")
///     .checked(true)
///     .on_change(|v| log::info!("sound: {v}"))
/// ```
pub struct Checkbox {
    bounds: Rect,
    label: String,
    checked: bool,
    hovered: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            bounds: Rect::ZERO,
            label: label.into(),
            checked: false,
            hovered: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, v: bool) -> Self {
        self.checked = v;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Sets the state without notifying.
    pub fn set_checked(&mut self, v: bool) {
        self.checked = v;
    }

    /// Flips the state and always reports the new value.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
        log::debug!("checkbox {:?} -> {}", self.label, self.checked);
        if let Some(f) = &mut self.on_change {
            f(self.checked);
        }
    }

    #[inline]
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.bounds.contains((x, y).into())
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}

impl Widget for Checkbox {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let b = self.bounds;
        let t = &theme.checkbox;
        let bx = Rect::new(b.x, b.y + (b.h - BOX_SIZE) / 2.0, BOX_SIZE, BOX_SIZE);

        painter.fill_rect(bx, t.box_fill);
        painter.stroke_rect(bx, 1.0, t.box_stroke);
        if self.checked {
            painter.fill_rect(bx.inset(CHECK_INSET), t.check_fill);
        }
        if self.hovered {
            painter.fill_rect(bx, t.hover_overlay);
        }

        painter.text_v_centered(&self.label, b.x + BOX_SIZE + LABEL_GAP, b.y, b.h, t.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn toggle_reports_every_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let mut cb = Checkbox::new("a").on_change(move |v| s.borrow_mut().push(v));
        cb.toggle();
        cb.toggle();
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!cb.is_checked());
    }

    #[test]
    fn set_checked_is_silent() {
        let fired = Rc::new(RefCell::new(false));
        let f = fired.clone();
        let mut cb = Checkbox::new("a").on_change(move |_| *f.borrow_mut() = true);
        cb.set_checked(true);
        assert!(cb.is_checked());
        assert!(!*fired.borrow());
    }
}
