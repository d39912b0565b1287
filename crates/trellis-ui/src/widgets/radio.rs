use trellis_engine::coords::{Rect, Vec2};

use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

const CIRCLE_SIZE: f32 = 14.0;
const DOT_INSET: f32 = 3.0;
const LABEL_GAP: f32 = 8.0;

/// An option within a [`RadioGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadioOption {
    /// Display label.
    pub label: String,
    /// Logical value reported on selection.
    pub value: String,
}

impl RadioOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Vertical list of mutually exclusive options, one fixed-height row each.
///
/// # Example
/// ```rust,ignore
/// RadioGroup::new(vec![
///     RadioOption::new("Easy", "easy"),
///     RadioOption::new("Hard", "hard"),
/// ])
/// .on_change(|i, v| log::info!("difficulty #{i}: {v}"))
/// ```
pub struct RadioGroup {
    bounds: Rect,
    options: Vec<RadioOption>,
    selected: Option<usize>,
    hovered: Option<usize>,
    item_height: f32,
    on_change: Option<Box<dyn FnMut(usize, &str)>>,
}

impl RadioGroup {
    pub fn new(options: Vec<RadioOption>) -> Self {
        Self {
            bounds: Rect::ZERO,
            options,
            selected: None,
            hovered: None,
            item_height: 24.0,
            on_change: None,
        }
    }

    pub fn item_height(mut self, h: f32) -> Self {
        self.item_height = h;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn set_item_height(&mut self, h: f32) {
        self.item_height = h;
    }

    #[inline]
    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    /// Replaces every option and clears selection and hover.
    pub fn set_options(&mut self, options: Vec<RadioOption>) {
        self.options = options;
        self.selected = None;
        self.hovered = None;
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&RadioOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    /// Row under `(x, y)`.
    ///
    /// The group's bottom edge is not checked: rows below a short laid-out
    /// rectangle still hit.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let b = self.bounds;
        if x < b.x || x >= b.right() || y < b.y || self.item_height <= 0.0 {
            return None;
        }
        let row = ((y - b.y) / self.item_height) as usize;
        (row < self.options.len()).then_some(row)
    }

    /// Selects `index` and reports it. Out of range is a no-op.
    pub fn select(&mut self, index: usize) {
        let Some(opt) = self.options.get(index) else {
            return;
        };
        self.selected = Some(index);
        log::debug!("radio select {} ({:?})", index, opt.value);
        if let Some(f) = &mut self.on_change {
            f(index, &opt.value);
        }
    }
}

impl Widget for RadioGroup {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let b = self.bounds;
        let t = &theme.radio;
        let r = CIRCLE_SIZE / 2.0;

        for (i, opt) in self.options.iter().enumerate() {
            let row_y = b.y + i as f32 * self.item_height;
            let center = Vec2::new(b.x + r, row_y + (self.item_height - CIRCLE_SIZE) / 2.0 + r);

            painter.fill_circle(center, r, t.circle_fill);
            painter.stroke_circle(center, r, 1.0, t.circle_stroke);
            if self.selected == Some(i) {
                painter.fill_circle(center, r - DOT_INSET, t.selected_fill);
            }
            if self.hovered == Some(i) {
                painter.fill_circle(center, r, t.hover_overlay);
            }

            painter.text_v_centered(&opt.label, b.x + CIRCLE_SIZE + LABEL_GAP, row_y, self.item_height, t.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn group(n: usize) -> RadioGroup {
        let opts = (0..n).map(|i| RadioOption::new(format!("o{i}"), format!("v{i}"))).collect();
        let mut g = RadioGroup::new(opts);
        g.set_bounds(Rect::new(0.0, 10.0, 200.0, 96.0));
        g
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn hit_test_divides_by_row_height() {
        let g = group(4);
        assert_eq!(g.hit_test(5.0, 50.0), Some(1));
        assert_eq!(g.hit_test(5.0, 10.0), Some(0));
        assert_eq!(g.hit_test(5.0, 105.9), Some(3));
    }

    #[test]
    fn hit_test_misses_outside() {
        let g = group(4);
        assert_eq!(g.hit_test(-1.0, 50.0), None);
        assert_eq!(g.hit_test(200.0, 50.0), None);
        assert_eq!(g.hit_test(5.0, 9.0), None);
        assert_eq!(g.hit_test(5.0, 106.0), None);
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn select_reports_index_and_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let mut g = group(3).on_change(move |i, v| s.borrow_mut().push((i, v.to_string())));
        g.select(2);
        assert_eq!(g.selected(), Some(2));
        assert_eq!(*seen.borrow(), vec![(2, "v2".to_string())]);
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let mut g = group(3);
        g.select(1);
        g.select(3);
        assert_eq!(g.selected(), Some(1));
    }

    #[test]
    fn set_options_resets_selection() {
        let mut g = group(3);
        g.select(1);
        g.set_hovered(Some(2));
        g.set_options(vec![RadioOption::new("a", "a")]);
        assert_eq!(g.selected(), None);
        assert_eq!(g.hovered(), None);
    }
}
